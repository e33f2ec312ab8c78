//! Runtime error types for the evaluator.

use bv_codec::CodecError;
use thiserror::Error;

/// Errors raised while evaluating an expression. Every error is terminal for
/// the call that raised it; the evaluator never retries or coerces.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// A variable reference with no binding anywhere in the frame chain.
    #[error("unbound variable v{0}")]
    UnboundVariable(u64),

    /// The left operand of an application was not a closure.
    #[error("cannot apply {got}: not a lambda")]
    NotCallable { got: &'static str },

    /// A primitive received a value variant it does not consume.
    #[error("type mismatch in '{op}': expected {expected}, got {got}")]
    TypeMismatch {
        op: char,
        expected: &'static str,
        got: &'static str,
    },

    /// Integer division or remainder with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// The step budget ran out. The language is Turing-complete, so a bound
    /// on machine transitions is the only way to stop a runaway program.
    #[error("step limit of {0} exceeded")]
    StepLimitExceeded(u64),

    /// `U#` or `U$` fed text or an integer the codecs cannot represent.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, RuntimeError>;
