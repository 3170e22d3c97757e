use crate::Base;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RingError>;

#[derive(Error, Debug)]
pub enum RingError {
    #[error("Index: {index}, Size: {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Range {from}..{to} out of bounds for size {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },

    #[error("Null digits are not permitted")]
    NullDigit,

    #[error("Digit {digit} is not valid in base {base}")]
    DigitOutOfRange { digit: u8, base: Base },

    #[error("Division by zero")]
    DivisionByZero,

    /// The ring changed size behind a [`Cursor`](crate::Cursor)
    #[error("ring was modified outside the cursor (expected size {expected}, found {actual})")]
    ConcurrentModification { expected: usize, actual: usize },

    #[error("no more elements in this direction")]
    NoSuchElement,

    /// `set`/`remove` on a cursor without a preceding `next`/`previous`
    #[error("cursor has no current element")]
    NoCurrentElement,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
