use std::iter::FusedIterator;

use crate::ring::NodeId;
use crate::{DigitRing, Result, RingError};

/// Forward-only view over the digits of a ring.
///
/// Yields exactly as many digits as the ring held when the view was
/// created, counting steps instead of watching for the head to come round.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    ring: &'a DigitRing,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(ring: &'a DigitRing) -> Self {
        Iter {
            ring,
            current: ring.head(),
            remaining: ring.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.ring.node(self.current?);
        self.current = Some(node.next);
        self.remaining -= 1;
        Some(node.digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DigitRing {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Bidirectional, mutation-aware position within a ring.
///
/// A cursor does not borrow the ring; every call takes the ring it was
/// created from. The cursor remembers the ring's size and rejects any call
/// with [`RingError::ConcurrentModification`] once the size has changed
/// through something other than the cursor itself.
///
/// Only the size is remembered, not which ring the cursor belongs to:
/// passing a different ring of the same length is not detected and the
/// cursor simply walks that ring instead.
#[derive(Debug, Clone)]
pub struct Cursor {
    /// index of the digit the next call to `next` returns
    index: usize,
    /// index of the digit last returned by `next` or `previous`
    last_returned: Option<usize>,
    expected_len: usize,
}

impl Cursor {
    pub fn has_next(&self, ring: &DigitRing) -> bool {
        self.index < ring.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Index of the digit `previous` would return, `None` at the front
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    pub fn next(&mut self, ring: &DigitRing) -> Result<u8> {
        self.check(ring)?;
        if !self.has_next(ring) {
            return Err(RingError::NoSuchElement);
        }
        let digit = ring.get(self.index)?;
        self.last_returned = Some(self.index);
        self.index += 1;
        Ok(digit)
    }

    pub fn previous(&mut self, ring: &DigitRing) -> Result<u8> {
        self.check(ring)?;
        if !self.has_previous() {
            return Err(RingError::NoSuchElement);
        }
        let digit = ring.get(self.index - 1)?;
        self.index -= 1;
        self.last_returned = Some(self.index);
        Ok(digit)
    }

    /// Replaces the digit last returned by `next` or `previous`
    pub fn set(&mut self, ring: &mut DigitRing, digit: impl Into<Option<u8>>) -> Result<u8> {
        self.check(ring)?;
        let at = self.last_returned.ok_or(RingError::NoCurrentElement)?;
        ring.set(at, digit)
    }

    /// Removes the digit last returned by `next` or `previous`
    pub fn remove(&mut self, ring: &mut DigitRing) -> Result<u8> {
        self.check(ring)?;
        let at = self.last_returned.ok_or(RingError::NoCurrentElement)?;
        let digit = ring.remove(at)?;
        if at < self.index {
            self.index -= 1;
        }
        self.expected_len -= 1;
        self.last_returned = None;
        Ok(digit)
    }

    /// Inserts a digit at the cursor; a following `next` is unaffected
    pub fn insert(&mut self, ring: &mut DigitRing, digit: impl Into<Option<u8>>) -> Result<()> {
        self.check(ring)?;
        ring.insert(self.index, digit)?;
        self.index += 1;
        self.expected_len += 1;
        self.last_returned = None;
        Ok(())
    }

    fn check(&self, ring: &DigitRing) -> Result<()> {
        if ring.len() != self.expected_len {
            return Err(RingError::ConcurrentModification {
                expected: self.expected_len,
                actual: ring.len(),
            });
        }
        Ok(())
    }
}

impl DigitRing {
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Cursor positioned before the digit at `index`; `index == len` is
    /// allowed and places the cursor past the tail.
    ///
    /// Every later call on the cursor must be given this same ring.
    pub fn cursor(&self, index: usize) -> Result<Cursor> {
        if index > self.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(Cursor {
            index,
            last_returned: None,
            expected_len: self.len(),
        })
    }

    /// Cursor positioned before the head; like [`DigitRing::cursor`], it
    /// must only be used with this ring.
    pub fn cursor_front(&self) -> Cursor {
        Cursor {
            index: 0,
            last_returned: None,
            expected_len: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Base;

    fn ring(digits: &[u8]) -> DigitRing {
        DigitRing::from_digits(Base::Binary, digits.iter().copied()).unwrap()
    }

    #[test]
    fn test_iter_is_exact_size() {
        let r = ring(&[1, 0, 1]);
        let mut it = r.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(DigitRing::new().iter().next(), None);
    }

    #[test]
    fn test_for_loop_over_ref() {
        let r = ring(&[1, 1, 0]);
        let mut sum = 0;
        for digit in &r {
            sum += digit;
        }
        assert_eq!(sum, 2);
    }

    #[test]
    fn test_cursor_walks_both_ways() {
        let r = ring(&[1, 0, 1]);
        let mut c = r.cursor_front();
        assert_eq!(c.previous_index(), None);
        assert_eq!(c.next(&r).unwrap(), 1);
        assert_eq!(c.next(&r).unwrap(), 0);
        assert_eq!(c.next(&r).unwrap(), 1);
        assert!(matches!(c.next(&r), Err(RingError::NoSuchElement)));
        assert_eq!(c.previous(&r).unwrap(), 1);
        assert_eq!(c.previous(&r).unwrap(), 0);
        assert_eq!(c.previous(&r).unwrap(), 1);
        assert!(matches!(c.previous(&r), Err(RingError::NoSuchElement)));
    }

    #[test]
    fn test_cursor_start_index_is_validated() {
        let r = ring(&[1, 0]);
        assert!(r.cursor(2).is_ok());
        assert!(matches!(
            r.cursor(3),
            Err(RingError::IndexOutOfBounds { index: 3, len: 2 })
        ));
    }

    #[test]
    fn test_cursor_set_requires_current() {
        let mut r = ring(&[1, 0]);
        let mut c = r.cursor_front();
        assert!(matches!(c.set(&mut r, 1u8), Err(RingError::NoCurrentElement)));
        c.next(&r).unwrap();
        c.next(&r).unwrap();
        assert_eq!(c.set(&mut r, 1u8).unwrap(), 0);
        assert_eq!(r.to_vec(), vec![1, 1]);
    }

    #[test]
    fn test_cursor_on_another_ring_of_other_length() {
        let a = ring(&[1, 0, 1]);
        let b = ring(&[1, 0]);
        let mut c = a.cursor_front();
        assert!(matches!(
            c.next(&b),
            Err(RingError::ConcurrentModification { expected: 3, actual: 2 })
        ));
        assert_eq!(c.next(&a).unwrap(), 1);
    }

    #[test]
    fn test_cursor_remove_after_previous() {
        let mut r = ring(&[1, 0, 1]);
        let mut c = r.cursor(3).unwrap();
        assert_eq!(c.previous(&r).unwrap(), 1);
        assert_eq!(c.previous(&r).unwrap(), 0);
        assert_eq!(c.remove(&mut r).unwrap(), 0);
        assert_eq!(r.to_vec(), vec![1, 1]);
        assert_eq!(c.next_index(), 1);
        assert_eq!(c.next(&r).unwrap(), 1);
        assert!(matches!(c.remove(&mut r), Ok(1)));
        assert!(matches!(c.remove(&mut r), Err(RingError::NoCurrentElement)));
    }
}
