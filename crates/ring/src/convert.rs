//! Decimal and base conversions, and division through [`Integer`]

use digitring_bigint::Integer;
use tracing::debug;

use crate::{Base, DigitRing, Result, RingError};

impl DigitRing {
    /// Builds a binary ring from decimal text.
    ///
    /// Malformed, zero and negative input all produce an empty ring rather
    /// than an error.
    pub fn from_decimal(text: &str) -> Self {
        Self::from_decimal_in(text, Base::PRIMARY)
    }

    /// Builds a ring in `base` from decimal text, with the same lenient
    /// handling as [`DigitRing::from_decimal`].
    pub fn from_decimal_in(text: &str, base: Base) -> Self {
        let text = text.trim();
        match Integer::parse(text) {
            Ok(value) => Self::from_integer(&value, base),
            Err(err) => {
                debug!(input = text, error = %err, "not a decimal number, using an empty ring");
                Self::with_base(base)
            }
        }
    }

    /// Builds a ring in `base` holding `value`; non-positive values give an
    /// empty ring.
    pub fn from_integer(value: &Integer, base: Base) -> Self {
        let mut ring = Self::with_base(base);
        if value.signum() <= 0 {
            debug!(%value, "non-positive value, using an empty ring");
            return ring;
        }

        let radix = base.radix();
        let rendered = value.to_string_radix(radix).unwrap_or_default();
        for digit in rendered.chars().filter_map(|c| c.to_digit(radix)) {
            ring.link_back(digit as u8);
        }
        ring
    }

    /// The value of the ring; zero when empty
    pub fn to_integer(&self) -> Integer {
        if self.is_empty() {
            return Integer::new();
        }
        // Display renders exactly the digit string, and every digit is below the radix
        Integer::parse_radix(&self.to_string(), self.base().radix()).unwrap_or_default()
    }

    /// The value of the ring in decimal notation; `"0"` when empty
    pub fn to_decimal_string(&self) -> String {
        self.to_integer().to_string()
    }

    /// The same value re-expressed in the secondary base. Leaves `self` untouched.
    pub fn change_scale(&self) -> DigitRing {
        let decimal = self.to_decimal_string();
        debug!(%decimal, from = %self.base(), to = %Base::SECONDARY, "changing scale");
        Self::from_decimal_in(&decimal, Base::SECONDARY)
    }

    /// Truncating integer division of `self` by `divisor`, see [`divide`]
    pub fn div_ring(&self, divisor: &DigitRing) -> Result<DigitRing> {
        divide(self, divisor)
    }
}

/// Truncating integer division of two rings.
///
/// The quotient is a new ring in the primary base. Fails with
/// [`RingError::DivisionByZero`] when the divisor is empty or zero.
pub fn divide(dividend: &DigitRing, divisor: &DigitRing) -> Result<DigitRing> {
    if divisor.is_empty() {
        return Err(RingError::DivisionByZero);
    }

    let dividend = dividend.to_integer();
    let divisor = divisor.to_integer();
    let quotient = dividend
        .checked_div(&divisor)
        .ok_or(RingError::DivisionByZero)?;
    debug!(%dividend, %divisor, %quotient, "divided");

    Ok(DigitRing::from_decimal(&quotient.to_string()))
}
