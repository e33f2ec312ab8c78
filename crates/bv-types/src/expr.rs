//! AST node types for the bound-variable language.
//!
//! Expressions form an immutable, acyclic tree: each child is owned by its
//! parent and the root by whoever called the parser. Recursive variants are
//! boxed to keep the enum size reasonable. Integer literals are
//! arbitrary-precision — base-94 bodies routinely exceed machine words.

use num_bigint::BigInt;
use std::fmt;
use std::mem;

/// A parsed expression.
///
/// Application has no node of its own: on the wire it is the `$` binary
/// operator, and it stays that way here ([`BinOp::Apply`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `T` / `F`
    Bool(bool),
    /// `I<body>` — body decoded as base-94, most significant digit first.
    Int(BigInt),
    /// `S<body>` — body decoded through the 94-symbol text alphabet.
    Str(String),
    /// `v<body>` — variable reference by numeric id.
    Var(u64),
    /// `L<body> <expr>` — lambda abstraction binding one parameter.
    Lambda { param: u64, body: Box<Expr> },
    /// `U<op> <expr>`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `B<op> <expr> <expr>`
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `? <cond> <then> <otherwise>`
    If {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Drop for Expr {
    /// The derived drop would recurse through every boxed child, so freeing
    /// a deeply nested tree could overflow the host stack even though
    /// parsing and evaluating it did not. Dismantle iteratively instead:
    /// detach each node's children onto an owned worklist so every node is
    /// a leaf by the time it is actually freed.
    fn drop(&mut self) {
        let mut pending: Vec<Expr> = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Bool(_) | Expr::Int(_) | Expr::Str(_) | Expr::Var(_) => {}
        Expr::Lambda { body, .. } => pending.push(detach(body)),
        Expr::Unary { operand, .. } => pending.push(detach(operand)),
        Expr::Binary { left, right, .. } => {
            pending.push(detach(left));
            pending.push(detach(right));
        }
        Expr::If {
            cond,
            then,
            otherwise,
        } => {
            pending.push(detach(cond));
            pending.push(detach(then));
            pending.push(detach(otherwise));
        }
    }
}

/// Take the expression out of a boxed child, leaving an inert leaf behind.
fn detach(child: &mut Expr) -> Expr {
    mem::replace(child, Expr::Bool(false))
}

/// Unary operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-` — integer negation.
    Neg,
    /// `!` — boolean negation.
    Not,
    /// `#` — text → integer: the text's alphabet positions read as base-94
    /// digits.
    StrToInt,
    /// `$` — integer → text: base-94 digits decoded through the alphabet.
    IntToStr,
}

impl UnaryOp {
    /// Resolve a wire operator character. `None` for anything not in the
    /// table — unknown operators are rejected at parse time.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Neg),
            '!' => Some(Self::Not),
            '#' => Some(Self::StrToInt),
            '$' => Some(Self::IntToStr),
            _ => None,
        }
    }

    /// The wire character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Neg => '-',
            Self::Not => '!',
            Self::StrToInt => '#',
            Self::IntToStr => '$',
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{}", self.symbol())
    }
}

/// Binary operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `$` — application. Lazy: the right operand is bound unforced.
    Apply,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` — truncating toward zero.
    Div,
    /// `%` — remainder; sign follows the dividend.
    Mod,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=` — same-variant value equality.
    Eq,
    /// `|`
    Or,
    /// `&`
    And,
    /// `.` — text concatenation.
    Concat,
    /// `T` — take the first N characters: `BT <count> <text>`.
    Take,
    /// `D` — drop the first N characters: `BD <count> <text>`.
    Drop,
}

impl BinOp {
    /// Resolve a wire operator character. `None` for anything not in the
    /// table.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '$' => Some(Self::Apply),
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            '<' => Some(Self::Lt),
            '>' => Some(Self::Gt),
            '=' => Some(Self::Eq),
            '|' => Some(Self::Or),
            '&' => Some(Self::And),
            '.' => Some(Self::Concat),
            'T' => Some(Self::Take),
            'D' => Some(Self::Drop),
            _ => None,
        }
    }

    /// The wire character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Apply => '$',
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Lt => '<',
            Self::Gt => '>',
            Self::Eq => '=',
            Self::Or => '|',
            Self::And => '&',
            Self::Concat => '.',
            Self::Take => 'T',
            Self::Drop => 'D',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.symbol())
    }
}
