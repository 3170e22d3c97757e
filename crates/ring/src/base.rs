use std::fmt;

/// Numeral base the digits of a ring are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    /// Primary base, used for rings built from decimal input
    #[default]
    Binary,
    /// Secondary base, produced by [`DigitRing::change_scale`](crate::DigitRing::change_scale)
    Ternary,
}

impl Base {
    pub const PRIMARY: Base = Base::Binary;
    pub const SECONDARY: Base = Base::Ternary;

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Ternary => 3,
        }
    }

    /// Whether `digit` is a valid single digit in this base
    pub fn admits(self, digit: u8) -> bool {
        u32::from(digit) < self.radix()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}

impl TryFrom<u32> for Base {
    type Error = u32;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Base::Binary),
            3 => Ok(Base::Ternary),
            other => Err(other),
        }
    }
}
