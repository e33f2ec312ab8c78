//! The evaluator's runtime result type.

use crate::env::FrameId;
use bv_types::Expr;
use num_bigint::BigInt;
use std::fmt;

/// A fully evaluated value.
///
/// Borrows the expression tree: closures keep a reference to their body
/// node and an index into the evaluator's frame arena, never an owned copy
/// of either.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Bool(bool),
    Int(BigInt),
    Str(String),
    /// A lambda paired with the scope active at its definition site. Inert
    /// until it appears as the left operand of an application.
    Closure {
        param: u64,
        body: &'a Expr,
        scope: Option<FrameId>,
    },
}

impl Value<'_> {
    /// Variant name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Str(_) => "text",
            Value::Closure { .. } => "lambda",
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Closure { param, .. } => write!(f, "<lambda v{param}>"),
        }
    }
}
