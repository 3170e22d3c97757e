//! Arbitrary precision integers for digit rings
//!
//! A thin wrapper around `num-bigint::BigInt` exposing the handful of
//! operations the ring needs: decimal and radix parsing, radix rendering,
//! sign tests and truncating division.

mod integer;
mod parse;

pub use integer::Integer;
pub use parse::ParseIntegerError;

/// Smallest radix accepted by [`Integer::parse_radix`] and [`Integer::to_string_radix`]
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by [`Integer::parse_radix`] and [`Integer::to_string_radix`]
pub const MAX_RADIX: u32 = 36;
