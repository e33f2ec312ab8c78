//! Base-94 positional integer encoding.
//!
//! Digit values 0–93 are the printable ASCII characters `!` (33) through
//! `~` (126), most significant digit first.

use crate::error::{CodecError, CodecResult};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

const BASE: u32 = 94;
const DIGIT_ZERO: u8 = b'!';

/// Decode a base-94 digit string into an integer.
///
/// Every character must fall in `!`..`~`; anything else is an
/// [`CodecError::InvalidDigit`]. The empty string decodes to zero, matching
/// the positional sum over zero digits.
pub fn int_from_base94(digits: &str) -> CodecResult<BigInt> {
    let mut result = BigInt::zero();
    for c in digits.chars() {
        let ord = u32::from(c);
        if !(33..=126).contains(&ord) {
            return Err(CodecError::InvalidDigit(c));
        }
        result = result * BASE + (ord - u32::from(DIGIT_ZERO));
    }
    Ok(result)
}

/// Encode a non-negative integer as base-94 digits, most significant first.
///
/// Zero encodes as the single digit `!` — the divide/remainder loop alone
/// would emit nothing for it.
pub fn base94_from_int(n: &BigInt) -> CodecResult<String> {
    if n.is_negative() {
        return Err(CodecError::NegativeInteger(n.clone()));
    }
    if n.is_zero() {
        return Ok(String::from("!"));
    }
    let base = BigInt::from(BASE);
    let mut n = n.clone();
    let mut digits = Vec::new();
    while !n.is_zero() {
        let rem = (&n % &base)
            .to_u8()
            .expect("remainder of division by 94 fits in u8");
        digits.push(DIGIT_ZERO + rem);
        n /= &base;
    }
    digits.reverse();
    Ok(String::from_utf8(digits).expect("base-94 digits are ASCII"))
}
