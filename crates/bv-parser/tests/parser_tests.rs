//! Integration tests for the wire-format parser.

use bv_parser::{parse, ParseError};
use bv_types::{BinOp, Expr, UnaryOp};
use num_bigint::BigInt;

fn int(n: i64) -> Expr {
    Expr::Int(BigInt::from(n))
}

// ══════════════════════════════════════════════════════════════════════════════
// Literals
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn boolean_literals() {
    assert_eq!(parse("T").unwrap(), Expr::Bool(true));
    assert_eq!(parse("F").unwrap(), Expr::Bool(false));
}

#[test]
fn integer_literals() {
    assert_eq!(parse("I!").unwrap(), int(0));
    assert_eq!(parse("I$").unwrap(), int(3));
    assert_eq!(parse("I/6").unwrap(), int(1337));
}

#[test]
fn huge_integer_literal() {
    let wire = format!("I{}", "~".repeat(20));
    let expr = parse(&wire).unwrap();
    let Expr::Int(n) = &expr else {
        panic!("expected integer literal");
    };
    assert_eq!(*n, BigInt::from(94u32).pow(20) - 1);
}

#[test]
fn string_literal() {
    assert_eq!(
        parse("SB%,,/}Q/2,$_").unwrap(),
        Expr::Str("Hello World!".into())
    );
    // Empty body is the empty string.
    assert_eq!(parse("S").unwrap(), Expr::Str(String::new()));
}

#[test]
fn variable_reference() {
    assert_eq!(parse("v!").unwrap(), Expr::Var(0));
    assert_eq!(parse("v\"").unwrap(), Expr::Var(1));
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators & structure
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn unary_operator() {
    assert_eq!(
        parse("U- I$").unwrap(),
        Expr::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(int(3)),
        }
    );
}

#[test]
fn binary_operator() {
    assert_eq!(
        parse("B+ I# I$").unwrap(),
        Expr::Binary {
            op: BinOp::Add,
            left: Box::new(int(2)),
            right: Box::new(int(3)),
        }
    );
}

#[test]
fn nested_binary_operators() {
    // B* (B* 3 2) (B* 3 2)
    assert_eq!(
        parse("B* B* I$ I# B* I$ I#").unwrap(),
        Expr::Binary {
            op: BinOp::Mul,
            left: Box::new(Expr::Binary {
                op: BinOp::Mul,
                left: Box::new(int(3)),
                right: Box::new(int(2)),
            }),
            right: Box::new(Expr::Binary {
                op: BinOp::Mul,
                left: Box::new(int(3)),
                right: Box::new(int(2)),
            }),
        }
    );
}

#[test]
fn conditional() {
    assert_eq!(
        parse("? T I! I\"").unwrap(),
        Expr::If {
            cond: Box::new(Expr::Bool(true)),
            then: Box::new(int(0)),
            otherwise: Box::new(int(1)),
        }
    );
}

#[test]
fn lambda_and_application() {
    assert_eq!(
        parse("B$ L# v# I$").unwrap(),
        Expr::Binary {
            op: BinOp::Apply,
            left: Box::new(Expr::Lambda {
                param: 2,
                body: Box::new(Expr::Var(2)),
            }),
            right: Box::new(int(3)),
        }
    );
}

#[test]
fn take_and_drop_parse_as_binary() {
    assert!(matches!(
        parse("BT I$ S4%34").unwrap(),
        Expr::Binary { op: BinOp::Take, .. }
    ));
    assert!(matches!(
        parse("BD I\" S4%34").unwrap(),
        Expr::Binary { op: BinOp::Drop, .. }
    ));
}

// ══════════════════════════════════════════════════════════════════════════════
// Stack safety
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn deeply_nested_unary_chain() {
    // 50k nested negations would overflow a recursive-descent parser's call
    // stack; the frame stack handles it in one pass.
    let depth = 50_000;
    let wire = format!("{}I\"", "U- ".repeat(depth));
    let expr = parse(&wire).unwrap();
    let mut seen = 0;
    let mut cursor = &expr;
    while let Expr::Unary { operand, .. } = cursor {
        seen += 1;
        cursor = operand;
    }
    assert_eq!(seen, depth);
    assert_eq!(*cursor, int(1));
}

// ══════════════════════════════════════════════════════════════════════════════
// Failure modes
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn empty_input() {
    assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput));
}

#[test]
fn missing_operands() {
    assert_eq!(parse("B+ I!"), Err(ParseError::UnexpectedEndOfInput));
    assert_eq!(parse("U-"), Err(ParseError::UnexpectedEndOfInput));
    assert_eq!(parse("? T I!"), Err(ParseError::UnexpectedEndOfInput));
    assert_eq!(parse("L#"), Err(ParseError::UnexpectedEndOfInput));
}

#[test]
fn unrecognized_indicator_is_not_a_variable() {
    assert_eq!(
        parse("X"),
        Err(ParseError::UnrecognizedIndicator("X".into()))
    );
    // A boolean token with a body is malformed, not a fresh token kind.
    assert_eq!(
        parse("Txyz"),
        Err(ParseError::UnrecognizedIndicator("Txyz".into()))
    );
}

#[test]
fn unknown_operator_body() {
    assert_eq!(parse("U^ I!"), Err(ParseError::UnknownOperator("U^".into())));
    assert_eq!(parse("B@ I! I!"), Err(ParseError::UnknownOperator("B@".into())));
    assert_eq!(parse("B I! I!"), Err(ParseError::UnknownOperator("B".into())));
}

#[test]
fn invalid_literal_digit() {
    assert_eq!(parse("Iä"), Err(ParseError::InvalidDigit('ä')));
    assert_eq!(parse("Sä"), Err(ParseError::InvalidDigit('ä')));
}

#[test]
fn trailing_tokens_rejected() {
    assert_eq!(parse("T F"), Err(ParseError::TrailingInput("F".into())));
    assert_eq!(
        parse("B+ I! I! I!"),
        Err(ParseError::TrailingInput("I!".into()))
    );
}
