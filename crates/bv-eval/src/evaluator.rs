//! The continuation machine.
//!
//! Evaluation is a loop over two states — "evaluate this expression in this
//! scope" and "feed this value to the pending continuation" — with the
//! pending operator logic defunctionalized into [`Kont`] frames on an owned
//! stack. Recursion in the source language arrives as self-application, so
//! the machine never recurses on the host stack: forcing a thunk, taking a
//! branch, and entering a lambda body are all plain state transitions.

use crate::env::{Environment, FrameId, Thunk};
use crate::error::{EvalResult, RuntimeError};
use crate::value::Value;
use bv_codec::{base94_from_int, decode_text, encode_text, int_from_base94};
use bv_types::{BinOp, Expr, UnaryOp};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// Step budget used by the [`evaluate`] convenience wrapper. Callers with
/// tighter or looser bounds use [`Evaluator::with_step_limit`].
pub const DEFAULT_STEP_LIMIT: u64 = 10_000_000;

/// Evaluate an expression in a fresh empty environment.
pub fn evaluate(expr: &Expr) -> EvalResult<Value<'_>> {
    Evaluator::new().run(expr)
}

/// The evaluator: frame arena plus a counted step budget.
///
/// One `run` call drives one expression to completion; the step counter is
/// cumulative across runs on the same evaluator and readable afterwards via
/// [`steps`](Self::steps).
pub struct Evaluator<'a> {
    env: Environment<'a>,
    steps: u64,
    step_limit: u64,
}

/// Machine state: either work to do or a value looking for its continuation.
enum State<'a> {
    Eval {
        expr: &'a Expr,
        scope: Option<FrameId>,
    },
    Continue(Value<'a>),
}

/// A pending continuation frame.
enum Kont<'a> {
    /// Apply a unary operator to the incoming value.
    Unary { op: UnaryOp },
    /// Left operand arrived; evaluate the right one next.
    BinaryLeft {
        op: BinOp,
        right: &'a Expr,
        scope: Option<FrameId>,
    },
    /// Both operands in hand; apply the operator.
    BinaryRight { op: BinOp, left: Value<'a> },
    /// The operator position of an application: the incoming value must be a
    /// closure, and `arg` is bound to it *unforced*.
    Apply {
        arg: &'a Expr,
        scope: Option<FrameId>,
    },
    /// The condition of a conditional; exactly one branch gets evaluated.
    Branch {
        then: &'a Expr,
        otherwise: &'a Expr,
        scope: Option<FrameId>,
    },
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with the default step limit.
    pub fn new() -> Self {
        Self::with_step_limit(DEFAULT_STEP_LIMIT)
    }

    /// Create an evaluator with an explicit step limit.
    pub fn with_step_limit(step_limit: u64) -> Self {
        Self {
            env: Environment::new(),
            steps: 0,
            step_limit,
        }
    }

    /// Machine transitions taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Consume one step of budget.
    fn tick(&mut self) -> EvalResult<()> {
        self.steps += 1;
        if self.steps > self.step_limit {
            Err(RuntimeError::StepLimitExceeded(self.step_limit))
        } else {
            Ok(())
        }
    }

    /// Run the machine over one expression.
    pub fn run(&mut self, root: &'a Expr) -> EvalResult<Value<'a>> {
        let mut konts: Vec<Kont<'a>> = Vec::new();
        let mut state = State::Eval {
            expr: root,
            scope: None,
        };

        loop {
            self.tick()?;
            state = match state {
                State::Eval { expr, scope } => match expr {
                    Expr::Bool(b) => State::Continue(Value::Bool(*b)),
                    Expr::Int(n) => State::Continue(Value::Int(n.clone())),
                    Expr::Str(s) => State::Continue(Value::Str(s.clone())),

                    Expr::Var(id) => {
                        let thunk = self
                            .env
                            .lookup(scope, *id)
                            .ok_or(RuntimeError::UnboundVariable(*id))?;
                        // Call-by-name force: re-dispatch the suspended
                        // expression under its own captured scope, current
                        // continuation unchanged. No memo, every use re-runs.
                        State::Eval {
                            expr: thunk.expr,
                            scope: thunk.scope,
                        }
                    }

                    Expr::Lambda { param, body } => State::Continue(Value::Closure {
                        param: *param,
                        body: &**body,
                        scope,
                    }),

                    Expr::Unary { op, operand } => {
                        konts.push(Kont::Unary { op: *op });
                        State::Eval {
                            expr: &**operand,
                            scope,
                        }
                    }

                    Expr::Binary {
                        op: BinOp::Apply,
                        left,
                        right,
                    } => {
                        konts.push(Kont::Apply {
                            arg: &**right,
                            scope,
                        });
                        State::Eval {
                            expr: &**left,
                            scope,
                        }
                    }

                    Expr::Binary { op, left, right } => {
                        konts.push(Kont::BinaryLeft {
                            op: *op,
                            right: &**right,
                            scope,
                        });
                        State::Eval {
                            expr: &**left,
                            scope,
                        }
                    }

                    Expr::If {
                        cond,
                        then,
                        otherwise,
                    } => {
                        konts.push(Kont::Branch {
                            then: &**then,
                            otherwise: &**otherwise,
                            scope,
                        });
                        State::Eval {
                            expr: &**cond,
                            scope,
                        }
                    }
                },

                State::Continue(value) => match konts.pop() {
                    None => return Ok(value),

                    Some(Kont::Unary { op }) => State::Continue(apply_unary(op, value)?),

                    Some(Kont::BinaryLeft { op, right, scope }) => {
                        konts.push(Kont::BinaryRight { op, left: value });
                        State::Eval { expr: right, scope }
                    }

                    Some(Kont::BinaryRight { op, left }) => {
                        State::Continue(apply_binary(op, left, value)?)
                    }

                    Some(Kont::Apply { arg, scope }) => {
                        let Value::Closure {
                            param,
                            body,
                            scope: captured,
                        } = value
                        else {
                            return Err(RuntimeError::NotCallable {
                                got: value.type_name(),
                            });
                        };
                        // Bind the argument unforced under the *closure's*
                        // environment; the use site's scope travels inside
                        // the thunk.
                        let frame = self.env.bind(param, Thunk { expr: arg, scope }, captured);
                        State::Eval {
                            expr: body,
                            scope: Some(frame),
                        }
                    }

                    Some(Kont::Branch {
                        then,
                        otherwise,
                        scope,
                    }) => {
                        let Value::Bool(cond) = value else {
                            return Err(RuntimeError::TypeMismatch {
                                op: '?',
                                expected: "boolean",
                                got: value.type_name(),
                            });
                        };
                        // The untaken branch is never evaluated; recursive
                        // fixpoint encodings rely on this to terminate.
                        State::Eval {
                            expr: if cond { then } else { otherwise },
                            scope,
                        }
                    }
                },
            };
        }
    }
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Primitives
// ══════════════════════════════════════════════════════════════════════════════

fn apply_unary(op: UnaryOp, operand: Value<'_>) -> EvalResult<Value<'_>> {
    match op {
        UnaryOp::Neg => Ok(Value::Int(-into_int(op.symbol(), operand)?)),
        UnaryOp::Not => Ok(Value::Bool(!into_bool(op.symbol(), operand)?)),
        // Text → integer: the text's wire bytes read as base-94 digits.
        UnaryOp::StrToInt => {
            let text = into_str(op.symbol(), operand)?;
            Ok(Value::Int(int_from_base94(&encode_text(&text)?)?))
        }
        // Integer → text: base-94 digits decoded through the alphabet.
        UnaryOp::IntToStr => {
            let n = into_int(op.symbol(), operand)?;
            Ok(Value::Str(decode_text(&base94_from_int(&n)?)?))
        }
    }
}

fn apply_binary<'a>(op: BinOp, left: Value<'a>, right: Value<'a>) -> EvalResult<Value<'a>> {
    let sym = op.symbol();
    match op {
        BinOp::Apply => unreachable!("application is scheduled by the machine, never reduced here"),

        BinOp::Add => Ok(Value::Int(into_int(sym, left)? + into_int(sym, right)?)),
        BinOp::Sub => Ok(Value::Int(into_int(sym, left)? - into_int(sym, right)?)),
        BinOp::Mul => Ok(Value::Int(into_int(sym, left)? * into_int(sym, right)?)),

        // Truncating toward zero; remainder sign follows the dividend.
        // num-bigint's `/` and `%` already use that convention.
        BinOp::Div => {
            let (a, b) = (into_int(sym, left)?, into_int(sym, right)?);
            if b.is_zero() {
                return Err(RuntimeError::DivideByZero);
            }
            Ok(Value::Int(a / b))
        }
        BinOp::Mod => {
            let (a, b) = (into_int(sym, left)?, into_int(sym, right)?);
            if b.is_zero() {
                return Err(RuntimeError::DivideByZero);
            }
            Ok(Value::Int(a % b))
        }

        BinOp::Lt => Ok(Value::Bool(into_int(sym, left)? < into_int(sym, right)?)),
        BinOp::Gt => Ok(Value::Bool(into_int(sym, left)? > into_int(sym, right)?)),

        BinOp::Eq => Ok(Value::Bool(value_eq(&left, &right))),

        BinOp::Or => Ok(Value::Bool(
            into_bool(sym, left)? | into_bool(sym, right)?,
        )),
        BinOp::And => Ok(Value::Bool(
            into_bool(sym, left)? & into_bool(sym, right)?,
        )),

        BinOp::Concat => {
            let mut a = into_str(sym, left)?;
            a.push_str(&into_str(sym, right)?);
            Ok(Value::Str(a))
        }

        // Canonical operand order: (count, text).
        BinOp::Take => {
            let count = into_int(sym, left)?;
            let text = into_str(sym, right)?;
            let k = clamp_count(&count, text.len());
            Ok(Value::Str(text[..k].to_string()))
        }
        BinOp::Drop => {
            let count = into_int(sym, left)?;
            let text = into_str(sym, right)?;
            let k = clamp_count(&count, text.len());
            Ok(Value::Str(text[k..].to_string()))
        }
    }
}

/// Same-variant value equality. Mismatched variants compare unequal rather
/// than raising, and closures are never equal to anything.
fn value_eq(a: &Value<'_>, b: &Value<'_>) -> bool {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        _ => false,
    }
}

/// Clamp a take/drop count into `[0, len]`. Text is ASCII by construction
/// (it only ever comes out of the 94-symbol decoder), so byte indexing is
/// character indexing.
fn clamp_count(count: &BigInt, len: usize) -> usize {
    if count.is_negative() {
        0
    } else {
        count.to_usize().map_or(len, |c| c.min(len))
    }
}

fn into_int(op: char, v: Value<'_>) -> EvalResult<BigInt> {
    match v {
        Value::Int(n) => Ok(n),
        other => Err(RuntimeError::TypeMismatch {
            op,
            expected: "integer",
            got: other.type_name(),
        }),
    }
}

fn into_bool(op: char, v: Value<'_>) -> EvalResult<bool> {
    match v {
        Value::Bool(b) => Ok(b),
        other => Err(RuntimeError::TypeMismatch {
            op,
            expected: "boolean",
            got: other.type_name(),
        }),
    }
}

fn into_str(op: char, v: Value<'_>) -> EvalResult<String> {
    match v {
        Value::Str(s) => Ok(s),
        other => Err(RuntimeError::TypeMismatch {
            op,
            expected: "text",
            got: other.type_name(),
        }),
    }
}
