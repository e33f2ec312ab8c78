//! Command-line client for the bound-variable puzzle service.
//!
//! ```text
//! bv [--token PATH] [--endpoint URL] send <words…>     one raw command round-trip
//! bv [--token PATH] [--endpoint URL] lambdaman <n>     fetch, solve, and submit a maze
//! bv eval <file|->                                     evaluate a local wire-format program
//! ```

mod error;
mod transport;

use crate::error::{ClientError, ClientResult};
use crate::transport::{Client, DEFAULT_TOKEN_FILE};
use bv_eval::Evaluator;
use bv_parser::parse;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, process};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> ClientResult<()> {
    let mut token_path = PathBuf::from(DEFAULT_TOKEN_FILE);
    let mut endpoint: Option<String> = None;
    let mut rest = args;
    loop {
        match rest.first().map(String::as_str) {
            Some("--token") => {
                token_path = PathBuf::from(rest.get(1).ok_or_else(usage)?);
                rest = &rest[2..];
            }
            Some("--endpoint") => {
                endpoint = Some(rest.get(1).ok_or_else(usage)?.clone());
                rest = &rest[2..];
            }
            _ => break,
        }
    }

    match rest.split_first() {
        Some((cmd, tail)) => match cmd.as_str() {
            "send" if !tail.is_empty() => send(&token_path, endpoint.as_deref(), &tail.join(" ")),
            "lambdaman" if tail.len() == 1 => lambdaman(&token_path, endpoint.as_deref(), &tail[0]),
            "eval" if tail.len() == 1 => eval_local(&tail[0]),
            _ => Err(usage()),
        },
        None => Err(usage()),
    }
}

/// Load the token and apply an endpoint override if one was given.
fn client(token_path: &Path, endpoint: Option<&str>) -> ClientResult<Client> {
    let client = Client::from_token_file(token_path)?;
    Ok(match endpoint {
        Some(url) => client.with_endpoint(url),
        None => client,
    })
}

/// One raw command round-trip, response printed as rendered text.
fn send(token_path: &Path, endpoint: Option<&str>, command: &str) -> ClientResult<()> {
    let client = client(token_path, endpoint)?;
    println!("{}", client.communicate(command)?);
    Ok(())
}

/// Fetch `lambdaman<n>`, solve the returned maze, submit the moves.
fn lambdaman(token_path: &Path, endpoint: Option<&str>, number: &str) -> ClientResult<()> {
    let client = client(token_path, endpoint)?;
    let task = format!("lambdaman{number}");

    let maze = client.communicate(&format!("get {task}"))?;
    let moves = bv_solver::solve(&maze)?;
    eprintln!("{task}: {} moves", moves.len());

    println!("{}", client.communicate(&format!("solve {task} {moves}"))?);
    Ok(())
}

/// Evaluate a local wire-format program (`-` reads stdin) and print the
/// value plus the step count.
fn eval_local(source: &str) -> ClientResult<()> {
    let wire = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(source)?
    };

    let expr = parse(wire.trim())?;
    let mut evaluator = Evaluator::new();
    let value = evaluator.run(&expr)?;
    println!("{value}");
    eprintln!("({} steps)", evaluator.steps());
    Ok(())
}

fn usage() -> ClientError {
    ClientError::Usage(
        "usage: bv [--token PATH] [--endpoint URL] <send <words…> | lambdaman <n> | eval <file|->>"
            .into(),
    )
}
