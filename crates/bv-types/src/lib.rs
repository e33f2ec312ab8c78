//! Shared types for the bound-variable interpreter.
//!
//! This crate defines the expression tree produced by the parser and the
//! closed operator enums consumed by the evaluator.

pub mod expr;

pub use expr::{BinOp, Expr, UnaryOp};
