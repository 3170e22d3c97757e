//! Circular singly-linked digit rings.
//!
//! A [`DigitRing`] stores a non-negative integer one positional digit per
//! node, most significant digit at the head. Nodes live in an arena and are
//! linked by slot id, the tail's successor being the head.
//!
//! ```
//! use digitring::{Base, DigitRing};
//!
//! let ring = DigitRing::from_decimal("13");
//! assert_eq!(ring.to_vec(), vec![1, 1, 0, 1]);
//! assert_eq!(ring.to_decimal_string(), "13");
//!
//! let ternary = ring.change_scale();
//! assert_eq!(ternary.base(), Base::Ternary);
//! assert_eq!(ternary.to_string(), "111");
//! ```

mod base;
mod bulk;
mod convert;
mod err;
mod iter;
pub mod persist;
mod ring;

pub use base::Base;
pub use convert::divide;
pub use err::{Result, RingError};
pub use iter::{Cursor, Iter};
pub use ring::DigitRing;

pub use digitring_bigint::Integer;
