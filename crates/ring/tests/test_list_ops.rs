use digitring::{Base, DigitRing, RingError};
use pretty_assertions::assert_eq;

fn binary(digits: &[u8]) -> DigitRing {
    DigitRing::from_digits(Base::Binary, digits.iter().copied()).unwrap()
}

#[test]
fn test_drain_from_head() {
    let mut ring = DigitRing::new();
    for digit in [1u8, 0, 1, 1, 0, 0, 1] {
        ring.push(digit).unwrap();
    }
    let mut drained = Vec::new();
    for _ in 0..ring.len() {
        drained.push(ring.remove(0).unwrap());
    }
    assert_eq!(drained, vec![1, 0, 1, 1, 0, 0, 1]);
    assert!(ring.is_empty());
    assert!(matches!(
        ring.get(0),
        Err(RingError::IndexOutOfBounds { index: 0, len: 0 })
    ));
}

#[test]
fn test_shift_round_trips() {
    let original = binary(&[1, 1, 0, 1, 0]);

    let mut ring = original.clone();
    ring.shift_left();
    assert_eq!(ring.to_vec(), vec![1, 0, 1, 0, 1]);
    ring.shift_right();
    assert_eq!(ring, original);

    ring.shift_right();
    assert_eq!(ring.to_vec(), vec![0, 1, 1, 0, 1]);
    ring.shift_left();
    for i in 0..ring.len() {
        assert_eq!(ring.get(i).unwrap(), original.get(i).unwrap());
    }
}

#[test]
fn test_full_rotation_is_identity() {
    let original = binary(&[1, 0, 0, 1, 1, 1]);
    let mut ring = original.clone();
    for _ in 0..ring.len() {
        ring.shift_left();
    }
    assert_eq!(ring, original);
    for _ in 0..ring.len() {
        ring.shift_right();
    }
    assert_eq!(ring, original);
}

#[test]
fn test_shift_small_rings_is_noop() {
    let mut empty = DigitRing::new();
    empty.shift_left();
    empty.shift_right();
    assert!(empty.is_empty());

    let mut single = binary(&[1]);
    single.shift_left();
    single.shift_right();
    assert_eq!(single.to_vec(), vec![1]);
}

#[test]
fn test_sorting() {
    let mut ring = binary(&[1, 0, 1, 1, 0]);
    ring.sort_ascending();
    assert_eq!(ring.to_vec(), vec![0, 0, 1, 1, 1]);

    let mut ring = binary(&[1, 0, 1, 1, 0]);
    ring.sort_descending();
    assert_eq!(ring.to_vec(), vec![1, 1, 1, 0, 0]);

    let mut ternary = DigitRing::from_digits(Base::Ternary, [2u8, 0, 1, 2, 0, 1]).unwrap();
    ternary.sort_ascending();
    assert_eq!(ternary.to_vec(), vec![0, 0, 1, 1, 2, 2]);
    ternary.sort_descending();
    assert_eq!(ternary.to_vec(), vec![2, 2, 1, 1, 0, 0]);
}

#[test]
fn test_swap_contract() {
    let mut ring = binary(&[1, 0, 0]);
    for i in 0..ring.len() {
        assert!(ring.swap(i, i));
    }
    assert_eq!(ring.to_vec(), vec![1, 0, 0]);

    assert!(!ring.swap(0, 3));
    assert!(!ring.swap(7, 1));
    assert_eq!(ring.to_vec(), vec![1, 0, 0]);

    assert!(ring.swap(0, 2));
    assert_eq!(ring.to_vec(), vec![0, 0, 1]);
}

#[test]
fn test_index_of_and_last_index_of() {
    let ring = binary(&[0, 1, 1, 0, 1]);
    assert_eq!(ring.index_of(1), Some(1));
    assert_eq!(ring.last_index_of(1), Some(4));
    assert_eq!(ring.index_of(0), Some(0));
    assert_eq!(ring.last_index_of(0), Some(3));
    assert_eq!(ring.index_of(2), None);
    assert_eq!(DigitRing::new().last_index_of(0), None);
    assert!(ring.contains(0));
    assert!(!ring.contains(2));
}

#[test]
fn test_invalid_arguments_leave_ring_untouched() {
    let mut ring = binary(&[1, 0]);
    assert!(matches!(ring.push(None), Err(RingError::NullDigit)));
    assert!(matches!(ring.insert(1, None), Err(RingError::NullDigit)));
    assert!(matches!(ring.set(0, None), Err(RingError::NullDigit)));
    assert!(matches!(
        ring.push(3u8),
        Err(RingError::DigitOutOfRange { digit: 3, base: Base::Binary })
    ));
    assert!(matches!(ring.insert(3, 1u8), Err(RingError::IndexOutOfBounds { .. })));
    assert!(matches!(ring.remove(2), Err(RingError::IndexOutOfBounds { .. })));
    assert_eq!(ring.to_vec(), vec![1, 0]);
}

#[test]
fn test_clear_then_reuse() {
    let mut ring = DigitRing::from_decimal("1023");
    assert_eq!(ring.len(), 10);
    ring.clear();
    assert!(ring.is_empty());
    assert_eq!(ring.to_decimal_string(), "0");
    ring.push(1u8).unwrap();
    ring.push(0u8).unwrap();
    assert_eq!(ring.to_decimal_string(), "2");
}

#[test]
fn test_error_messages() {
    let ring = binary(&[1]);
    let err = ring.get(4).unwrap_err();
    assert_eq!(err.to_string(), "Index: 4, Size: 1");
    assert_eq!(RingError::NullDigit.to_string(), "Null digits are not permitted");
}
