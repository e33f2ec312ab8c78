//! Lambda-Man maze solver.
//!
//! Takes the maze text out of an evaluated puzzle response and produces a
//! move string (`U`/`D`/`L`/`R`) that visits every pill. Text in, text out:
//! this crate knows nothing about expressions, values, or the wire format.

mod grid;
mod solver;

pub use grid::{Cell, Grid};
pub use solver::{solve, SolveError};
