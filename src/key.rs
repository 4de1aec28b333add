/// Fixed-width signed integers that can be distributed into buckets.
///
/// All range arithmetic happens on the widened `i128` representation, which is at least twice as
/// wide as every implementing type, so `max - min` can never overflow there. Widened values always
/// fit into 64 bits, which keeps the slot scaling in `u128` exact. The trait is sealed for that reason.
///
/// ```compile_fail
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Wide(i128);
///
/// impl chen_sort::SignedKey for Wide {
///     const MIN: Self = Wide(i128::MIN);
///     const MAX: Self = Wide(i128::MAX);
///
///     fn widen(self) -> i128 {
///         self.0
///     }
/// }
/// ```
pub trait SignedKey: sealed::Sealed + Copy + Ord + 'static {
    const MIN: Self;
    const MAX: Self;

    fn widen(self) -> i128;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
}

impl SignedKey for i8 {
    const MIN: Self = i8::MIN;
    const MAX: Self = i8::MAX;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl SignedKey for i16 {
    const MIN: Self = i16::MIN;
    const MAX: Self = i16::MAX;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl SignedKey for i32 {
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl SignedKey for i64 {
    const MIN: Self = i64::MIN;
    const MAX: Self = i64::MAX;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl SignedKey for isize {
    const MIN: Self = isize::MIN;
    const MAX: Self = isize::MAX;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }
}

/// Returns true when `max - min` is representable in `T` itself.
#[inline]
pub(crate) fn range_fits<T: SignedKey>(min: T, max: T) -> bool {
    max.widen() - min.widen() <= T::MAX.widen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_preserves_order() {
        let values = vec![i64::MIN, -1, 0, 1, i64::MAX];
        for pair in values.windows(2) {
            assert!(pair[0].widen() < pair[1].widen());
        }
        assert_eq!(i8::MIN.widen(), -128);
        assert_eq!(isize::MAX.widen(), isize::MAX as i128);
    }

    #[test]
    fn test_widened_extremes_fit_64_bits() {
        fn assert_fits<T: SignedKey>() {
            assert!(T::MIN.widen() >= i64::MIN as i128);
            assert!(T::MAX.widen() <= i64::MAX as i128);
            // the largest offset a slot computation sees
            assert!(T::MAX.widen() - T::MIN.widen() <= u64::MAX as i128);
        }

        assert_fits::<i8>();
        assert_fits::<i16>();
        assert_fits::<i32>();
        assert_fits::<i64>();
        assert_fits::<isize>();
    }

    #[test]
    fn test_range_fits() {
        assert!(range_fits(-5_i32, 5));
        assert!(range_fits(0_i32, i32::MAX));
        assert!(range_fits(-1_i32, i32::MAX - 1));
        assert!(!range_fits(-1_i32, i32::MAX));
        assert!(!range_fits(i32::MIN, 0));
        assert!(!range_fits(i8::MIN, i8::MAX));
        assert!(range_fits(i64::MIN, -1));
    }
}
