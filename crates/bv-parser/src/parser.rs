//! Core parser: token cursor plus an explicit operand-frame stack.
//!
//! The grammar is flat prefix notation, so there is no precedence to manage;
//! each token either completes an expression on its own or opens an operator
//! frame that waits for its operands. Completed expressions reduce pending
//! frames from the top of an owned stack, so nesting depth is limited by
//! input size, never by the host call stack.

use crate::error::{ParseError, ParseResult};
use bv_codec::{decode_text, int_from_base94, CodecError};
use bv_types::{BinOp, Expr, UnaryOp};
use num_traits::ToPrimitive;

/// The wire-format parser.
///
/// Consumes a whitespace-split token stream left to right and builds the
/// expression tree.
pub struct Parser<'src> {
    /// The token stream.
    tokens: Vec<&'src str>,
    /// Current index into `tokens`.
    pos: usize,
}

/// A partially-filled operator, waiting on the frame stack for the rest of
/// its operands.
enum Frame {
    /// `U<op>` — one operand owed.
    Unary { op: UnaryOp },
    /// `L<param>` — the body owed.
    Lambda { param: u64 },
    /// `B<op>` — both operands owed.
    BinaryLeft { op: BinOp },
    /// `B<op>` with the left operand in hand.
    BinaryRight { op: BinOp, left: Expr },
    /// `?` — all three sub-expressions owed.
    IfCond,
    /// `?` with the condition in hand.
    IfThen { cond: Expr },
    /// `?` with condition and then-branch in hand.
    IfElse { cond: Expr, then: Expr },
}

/// Parse one wire line into an expression.
///
/// Convenience wrapper over [`Parser`]; rejects leftover tokens.
pub fn parse(input: &str) -> ParseResult<Expr> {
    Parser::new(input).parse()
}

impl<'src> Parser<'src> {
    /// Create a parser over a wire line.
    pub fn new(input: &'src str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace().collect(),
            pos: 0,
        }
    }

    /// Consume the next token, or `None` at end of stream.
    fn advance(&mut self) -> Option<&'src str> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parse exactly one expression; anything after it is an error.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        match self.advance() {
            None => Ok(expr),
            Some(extra) => Err(ParseError::TrailingInput(extra.to_string())),
        }
    }

    /// Parse one expression starting at the cursor.
    fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut frames: Vec<Frame> = Vec::new();
        loop {
            let token = self.advance().ok_or(ParseError::UnexpectedEndOfInput)?;
            let indicator = token.chars().next().expect("tokens are non-empty");
            let body = &token[indicator.len_utf8()..];

            let completed = match indicator {
                'T' if body.is_empty() => Some(Expr::Bool(true)),
                'F' if body.is_empty() => Some(Expr::Bool(false)),
                'I' => Some(Expr::Int(
                    int_from_base94(body).map_err(bad_digit)?,
                )),
                'S' => Some(Expr::Str(decode_text(body).map_err(bad_digit)?)),
                'v' => Some(Expr::Var(parse_id(body)?)),
                'U' => {
                    frames.push(Frame::Unary {
                        op: unary_op(token, body)?,
                    });
                    None
                }
                'B' => {
                    frames.push(Frame::BinaryLeft {
                        op: binary_op(token, body)?,
                    });
                    None
                }
                '?' if body.is_empty() => {
                    frames.push(Frame::IfCond);
                    None
                }
                'L' => {
                    frames.push(Frame::Lambda {
                        param: parse_id(body)?,
                    });
                    None
                }
                _ => return Err(ParseError::UnrecognizedIndicator(token.to_string())),
            };

            // Reduce: feed the finished expression into pending frames until
            // one still owes operands (or the stack empties).
            let Some(mut expr) = completed else { continue };
            loop {
                match frames.pop() {
                    None => return Ok(expr),
                    Some(Frame::Unary { op }) => {
                        expr = Expr::Unary {
                            op,
                            operand: Box::new(expr),
                        };
                    }
                    Some(Frame::Lambda { param }) => {
                        expr = Expr::Lambda {
                            param,
                            body: Box::new(expr),
                        };
                    }
                    Some(Frame::BinaryLeft { op }) => {
                        frames.push(Frame::BinaryRight { op, left: expr });
                        break;
                    }
                    Some(Frame::BinaryRight { op, left }) => {
                        expr = Expr::Binary {
                            op,
                            left: Box::new(left),
                            right: Box::new(expr),
                        };
                    }
                    Some(Frame::IfCond) => {
                        frames.push(Frame::IfThen { cond: expr });
                        break;
                    }
                    Some(Frame::IfThen { cond }) => {
                        frames.push(Frame::IfElse { cond, then: expr });
                        break;
                    }
                    Some(Frame::IfElse { cond, then }) => {
                        expr = Expr::If {
                            cond: Box::new(cond),
                            then: Box::new(then),
                            otherwise: Box::new(expr),
                        };
                    }
                }
            }
        }
    }
}

/// Decode a variable or parameter id body.
fn parse_id(body: &str) -> ParseResult<u64> {
    int_from_base94(body)
        .map_err(bad_digit)?
        .to_u64()
        .ok_or_else(|| ParseError::VariableIdTooLarge(body.to_string()))
}

/// Resolve the single-character operator body of a `U` token.
fn unary_op(token: &str, body: &str) -> ParseResult<UnaryOp> {
    single_char(body)
        .and_then(UnaryOp::from_symbol)
        .ok_or_else(|| ParseError::UnknownOperator(token.to_string()))
}

/// Resolve the single-character operator body of a `B` token.
fn binary_op(token: &str, body: &str) -> ParseResult<BinOp> {
    single_char(body)
        .and_then(BinOp::from_symbol)
        .ok_or_else(|| ParseError::UnknownOperator(token.to_string()))
}

fn single_char(body: &str) -> Option<char> {
    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn bad_digit(err: CodecError) -> ParseError {
    match err {
        CodecError::InvalidDigit(c) | CodecError::UnencodableCharacter(c) => {
            ParseError::InvalidDigit(c)
        }
        // Decoding never renders integers, so the encode-direction error
        // cannot reach the parser.
        CodecError::NegativeInteger(_) => unreachable!("parser only decodes"),
    }
}
