//! Authenticated exchange with the puzzle service.
//!
//! Outgoing commands travel as string literals (`S` + text-encoded body);
//! responses are full wire-format programs and go through the parser and
//! evaluator before anything is shown to the user.

use crate::error::ClientResult;
use bv_codec::encode_text;
use bv_eval::{Evaluator, Value};
use bv_parser::parse;
use std::fs;
use std::path::Path;

/// The puzzle service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://boundvariable.space/communicate";

/// Default location of the bearer token.
pub const DEFAULT_TOKEN_FILE: &str = "auth_token.txt";

/// An authenticated connection to the puzzle service.
pub struct Client {
    token: String,
    endpoint: String,
}

impl Client {
    /// Load the bearer token from a file (surrounding whitespace trimmed).
    pub fn from_token_file(path: &Path) -> ClientResult<Self> {
        let token = fs::read_to_string(path)?.trim().to_string();
        Ok(Self {
            token,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// One round-trip: encode the raw command, POST it, evaluate the
    /// response program, render the resulting value.
    pub fn communicate(&self, raw: &str) -> ClientResult<String> {
        let body = format!("S{}", encode_text(raw)?);
        let response = ureq::post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Content-Type", "text/plain")
            .send_string(&body)
            .map_err(Box::new)?
            .into_string()?;
        render(&response)
    }
}

/// Parse and evaluate one wire line, rendering the value for display: text
/// renders as its contents, everything else through `Display`.
pub fn render(wire: &str) -> ClientResult<String> {
    let expr = parse(wire.trim_end_matches(['\r', '\n']))?;
    let mut evaluator = Evaluator::new();
    let value = evaluator.run(&expr)?;
    Ok(match value {
        Value::Str(s) => s,
        other => other.to_string(),
    })
}
