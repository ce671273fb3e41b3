#[inline]
pub fn wrap_add(index: usize, addend: usize, len: usize) -> usize {
    debug_assert!(index < len);
    debug_assert!(addend < len);
    let sum = index + addend;
    if sum < len {
        sum
    } else {
        sum - len
    }
}

/// Shifts `index` by a signed `delta`, going around the ring as many times
/// as needed. The result is always in `0..len`.
#[inline]
pub fn wrap_shift(index: usize, delta: isize, len: usize) -> usize {
    debug_assert!(index < len);
    // `Vec` never holds more than `isize::MAX` elements.
    let steps = delta.rem_euclid(len as isize) as usize;
    wrap_add(index, steps, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_single_wrap() {
        assert_eq!(wrap_add(0, 0, 1), 0);
        assert_eq!(wrap_add(1, 2, 4), 3);
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(3, 3, 4), 2);
    }

    #[test]
    fn shift_negative_and_multi_lap() {
        assert_eq!(wrap_shift(0, -1, 4), 3);
        assert_eq!(wrap_shift(3, -17, 4), 2);
        assert_eq!(wrap_shift(3, 17, 4), 0);
        assert_eq!(wrap_shift(2, 4 * 9, 4), 2);
        assert_eq!(wrap_shift(2, -4 * 9, 4), 2);
    }

    #[test]
    fn shift_extremes() {
        assert_eq!(wrap_shift(0, isize::MIN, 3), isize::MIN.rem_euclid(3) as usize);
        assert_eq!(wrap_shift(0, isize::MAX, 3), isize::MAX.rem_euclid(3) as usize);
        assert_eq!(wrap_shift(0, isize::MIN, 1), 0);
    }
}
