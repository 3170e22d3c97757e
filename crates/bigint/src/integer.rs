//! Integer type backed by num-bigint::BigInt

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;
use std::str::FromStr;

use crate::parse::{self, ParseIntegerError};
use crate::{MAX_RADIX, MIN_RADIX};

/// Arbitrary precision integer backed by num-bigint
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(pub(crate) BigInt);

impl Integer {
    /// Creates a new Integer with value 0
    pub fn new() -> Self {
        Integer(BigInt::zero())
    }

    /// Parses an optionally signed decimal string
    pub fn parse(src: &str) -> Result<Self, ParseIntegerError> {
        parse::parse_radix(src, 10)
    }

    /// Parses an optionally signed string of digits in the given radix
    pub fn parse_radix(src: &str, radix: u32) -> Result<Self, ParseIntegerError> {
        parse::parse_radix(src, radix)
    }

    /// Renders the value in the given radix, lowercase, with a leading `-`
    /// for negative values.
    ///
    /// Returns `None` when the radix is outside `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> Option<String> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return None;
        }
        Some(self.0.to_str_radix(radix))
    }

    /// Returns -1, 0 or 1 depending on the sign
    pub fn signum(&self) -> i32 {
        if self.0.is_positive() {
            1
        } else if self.0.is_negative() {
            -1
        } else {
            0
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Truncating division, rounding toward zero.
    ///
    /// Returns `None` when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Integer) -> Option<Integer> {
        if divisor.is_zero() {
            return None;
        }
        Some(Integer(&self.0 / &divisor.0))
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(val: $t) -> Self {
                    Integer(BigInt::from(val))
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, u8, u32, u64, usize);
