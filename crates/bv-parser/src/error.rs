//! Parse error types.

use thiserror::Error;

/// Errors raised while parsing a wire-format token stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The stream ran out while an operator still expected operands.
    #[error("unexpected end of input: an operator is missing operands")]
    UnexpectedEndOfInput,

    /// A token whose indicator character is not in the grammar table.
    /// Unknown tokens are rejected outright — they are never treated as raw
    /// variable names.
    #[error("unrecognized indicator in token {0:?}")]
    UnrecognizedIndicator(String),

    /// A `U` or `B` token whose operator body is not in the operator table.
    #[error("unknown operator in token {0:?}")]
    UnknownOperator(String),

    /// A literal body character outside the base-94 digit range.
    #[error("invalid base-94 digit {0:?} in literal body")]
    InvalidDigit(char),

    /// A variable or parameter id too large to address.
    #[error("variable id {0:?} exceeds the supported range")]
    VariableIdTooLarge(String),

    /// Tokens left over after one complete expression. The wire format is a
    /// single expression per line.
    #[error("trailing input after a complete expression, starting at {0:?}")]
    TrailingInput(String),
}

/// Result alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
