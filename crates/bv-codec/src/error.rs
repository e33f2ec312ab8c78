//! Codec error types.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by the base-94 and text codecs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A wire character outside the printable range `!`..`~`.
    #[error("invalid base-94 digit {0:?}: expected printable ASCII '!'..'~'")]
    InvalidDigit(char),

    /// A text character with no slot in the 94-symbol alphabet (control
    /// characters, most non-ASCII).
    #[error("character {0:?} cannot be encoded in the 94-symbol alphabet")]
    UnencodableCharacter(char),

    /// The base-94 digit form has no sign; negative integers are
    /// unrepresentable.
    #[error("cannot render negative integer {0} as base-94 digits")]
    NegativeInteger(BigInt),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
