//! Aggregate operations built on the single-digit primitives

use crate::{DigitRing, Result, RingError};

impl DigitRing {
    /// Whether every digit in `digits` occurs somewhere in the ring
    pub fn contains_all(&self, digits: &[u8]) -> bool {
        digits.iter().all(|&digit| self.contains(digit))
    }

    /// Appends every digit in order.
    ///
    /// All digits are validated first; on error the ring is unchanged.
    /// Returns whether anything was appended.
    pub fn extend_digits<D, I>(&mut self, digits: I) -> Result<bool>
    where
        D: Into<Option<u8>>,
        I: IntoIterator<Item = D>,
    {
        let digits = self.admit_all(digits)?;
        for &digit in &digits {
            self.link_back(digit);
        }
        Ok(!digits.is_empty())
    }

    /// Inserts every digit in order, the first landing at `index`.
    ///
    /// The index and all digits are validated first; on error the ring is
    /// unchanged. Returns whether anything was inserted.
    pub fn insert_all<D, I>(&mut self, index: usize, digits: I) -> Result<bool>
    where
        D: Into<Option<u8>>,
        I: IntoIterator<Item = D>,
    {
        if index > self.len() {
            return Err(self.out_of_bounds(index));
        }
        let digits = self.admit_all(digits)?;
        for (offset, &digit) in digits.iter().enumerate() {
            self.link_at(index + offset, digit);
        }
        Ok(!digits.is_empty())
    }

    /// Removes every occurrence of every listed digit.
    ///
    /// Returns whether anything was removed.
    pub fn remove_all(&mut self, digits: &[u8]) -> bool {
        let mut modified = false;
        for &digit in digits {
            while self.remove_value(digit) {
                modified = true;
            }
        }
        modified
    }

    /// Keeps only digits whose value occurs in `digits`.
    ///
    /// Membership is by value, so duplicates are kept or dropped together.
    /// Returns whether anything was removed.
    pub fn retain_all(&mut self, digits: &[u8]) -> bool {
        let mut modified = false;
        let mut index = 0;
        while let Ok(digit) = self.get(index) {
            if digits.contains(&digit) {
                index += 1;
            } else {
                modified |= self.remove(index).is_ok();
            }
        }
        modified
    }

    /// Independent copy of the half-open range `from..to`, in the same base
    pub fn sub_list(&self, from: usize, to: usize) -> Result<DigitRing> {
        if from > to || to > self.len() {
            return Err(RingError::RangeOutOfBounds {
                from,
                to,
                len: self.len(),
            });
        }
        let mut sub = DigitRing::with_base(self.base());
        for digit in self.iter().skip(from).take(to - from) {
            sub.link_back(digit);
        }
        Ok(sub)
    }

    fn admit_all<D, I>(&self, digits: I) -> Result<Vec<u8>>
    where
        D: Into<Option<u8>>,
        I: IntoIterator<Item = D>,
    {
        digits.into_iter().map(|digit| self.admit(digit)).collect()
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
    fn test_extend_is_atomic() {
        let mut r = ring(&[1]);
        let err = r.extend_digits([Some(0u8), None, Some(1)]).unwrap_err();
        assert!(matches!(err, RingError::NullDigit));
        assert_eq!(r.to_vec(), vec![1]);

        assert!(r.extend_digits([0u8, 1]).unwrap());
        assert!(!r.extend_digits(Vec::<u8>::new()).unwrap());
        assert_eq!(r.to_vec(), vec![1, 0, 1]);
    }

    #[test]
    fn test_insert_all_keeps_order() {
        let mut r = ring(&[1, 1]);
        assert!(r.insert_all(1, [0u8, 0]).unwrap());
        assert_eq!(r.to_vec(), vec![1, 0, 0, 1]);
        assert!(r.insert_all(4, [0u8]).unwrap());
        assert_eq!(r.to_vec(), vec![1, 0, 0, 1, 0]);
        assert!(matches!(
            r.insert_all(9, [1u8]),
            Err(RingError::IndexOutOfBounds { index: 9, len: 5 })
        ));
    }

    #[test]
    fn test_remove_all_and_contains_all() {
        let mut r = ring(&[1, 0, 1, 0, 1]);
        assert!(r.contains_all(&[0, 1]));
        assert!(r.remove_all(&[0]));
        assert_eq!(r.to_vec(), vec![1, 1, 1]);
        assert!(!r.contains_all(&[0, 1]));
        assert!(!r.remove_all(&[0]));
    }

    #[test]
    fn test_retain_all_by_value() {
        let mut r = ring(&[1, 0, 1, 0]);
        assert!(r.retain_all(&[1]));
        assert_eq!(r.to_vec(), vec![1, 1]);
        assert!(!r.retain_all(&[0, 1]));
        assert!(r.retain_all(&[]));
        assert!(r.is_empty());
    }

    #[test]
    fn test_sub_list() {
        let r = DigitRing::from_digits(Base::Ternary, [2u8, 1, 0, 2]).unwrap();
        let sub = r.sub_list(1, 3).unwrap();
        assert_eq!(sub.to_vec(), vec![1, 0]);
        assert_eq!(sub.base(), Base::Ternary);
        assert!(r.sub_list(2, 2).unwrap().is_empty());
        assert!(matches!(r.sub_list(3, 2), Err(RingError::RangeOutOfBounds { .. })));
        assert!(matches!(r.sub_list(0, 5), Err(RingError::RangeOutOfBounds { .. })));
    }
}
