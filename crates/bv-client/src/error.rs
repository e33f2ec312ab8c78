//! Client error type: everything the CLI can trip over, in one enum.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("could not encode command: {0}")]
    Codec(#[from] bv_codec::CodecError),

    #[error("could not parse response: {0}")]
    Parse(#[from] bv_parser::ParseError),

    #[error("could not evaluate response: {0}")]
    Runtime(#[from] bv_eval::RuntimeError),

    #[error("solver failed: {0}")]
    Solve(#[from] bv_solver::SolveError),

    #[error("{0}")]
    Usage(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
