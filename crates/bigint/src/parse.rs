//! Parsing support for Integer
//!
//! Input is validated up front so that only plain `[+-]digits` text is
//! accepted. `num-bigint` on its own also tolerates `_` separators.

use crate::{Integer, MAX_RADIX, MIN_RADIX};
use num_bigint::{BigInt, Sign};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIntegerError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit '{digit}' for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    #[error("unsupported radix {0}, expected 2..=36")]
    UnsupportedRadix(u32),
}

pub(crate) fn parse_radix(src: &str, radix: u32) -> Result<Integer, ParseIntegerError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(ParseIntegerError::UnsupportedRadix(radix));
    }

    // Handle sign
    let (sign, digits) = match src.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &src[1..]),
        Some(b'+') => (Sign::Plus, &src[1..]),
        _ => (Sign::Plus, src),
    };

    if digits.is_empty() {
        return Err(ParseIntegerError::Empty);
    }

    if let Some(digit) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(ParseIntegerError::InvalidDigit { digit, radix });
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
        .ok_or(ParseIntegerError::Empty)?;

    Ok(match sign {
        Sign::Minus => Integer(-magnitude),
        _ => Integer(magnitude),
    })
}
