//! Lazy evaluator for the bound-variable language.
//!
//! Call-by-name semantics realized as an explicit continuation machine: one
//! owned stack of pending operator frames, one state word, one step counter.
//! Self-application encodes recursion in this language, so nothing here may
//! lean on host call-stack depth. The crate performs no I/O and knows
//! nothing about mazes or HTTP.

mod env;
mod error;
mod evaluator;
mod value;

pub use env::{Environment, FrameId, Thunk};
pub use error::{EvalResult, RuntimeError};
pub use evaluator::{evaluate, Evaluator, DEFAULT_STEP_LIMIT};
pub use value::Value;
