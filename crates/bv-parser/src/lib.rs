//! Parser for the bound-variable wire format: one line of space-separated
//! prefix-notation tokens in, an expression tree out.

mod error;
mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::{parse, Parser};
