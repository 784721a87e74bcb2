pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Collapses `n` by summing its digits until a single digit remains.
///
/// With `preserve_masters`, every intermediate value is checked and the loop
/// stops on 11, 22 or 33, so 29 → 11 and 38 → 11 but 44 → 8.
pub fn reduce(mut n: u32, preserve_masters: bool) -> u32 {
    loop {
        if preserve_masters && is_master(n) {
            return n;
        }
        if n <= 9 {
            return n;
        }
        n = digit_sum(n);
    }
}

/// Key used for table lookups: masters as-is, everything else reduced.
pub fn canonical(n: u32) -> u32 {
    if is_master(n) {
        n
    } else {
        reduce(n, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reduce_without_masters() {
        assert_eq!(reduce(29, false), 2);
        assert_eq!(reduce(11, false), 2);
        assert_eq!(reduce(22, false), 4);
        assert_eq!(reduce(33, false), 6);
        assert_eq!(reduce(5, false), 5);
        assert_eq!(reduce(9, false), 9);
        assert_eq!(reduce(0, false), 0);
        assert_eq!(reduce(1999, false), 1);
    }

    #[test]
    fn test_reduce_preserves_intermediate_masters() {
        assert_eq!(reduce(11, true), 11);
        assert_eq!(reduce(22, true), 22);
        assert_eq!(reduce(33, true), 33);
        assert_eq!(reduce(29, true), 11);
        assert_eq!(reduce(38, true), 11);
        assert_eq!(reduce(44, true), 8);
        // 499 → 22 is caught before collapsing to 4
        assert_eq!(reduce(499, true), 22);
        assert_eq!(reduce(0, true), 0);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(2000), 2);
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical(11), 11);
        assert_eq!(canonical(29), 2);
        assert_eq!(canonical(7), 7);
    }

    proptest! {
        #[test]
        fn prop_reduce_is_idempotent(n in 0u32..10_000_000, preserve in any::<bool>()) {
            let once = reduce(n, preserve);
            prop_assert_eq!(reduce(once, preserve), once);
        }

        #[test]
        fn prop_reduce_range(n in 0u32..10_000_000) {
            prop_assert!(reduce(n, false) <= 9);
            let kept = reduce(n, true);
            prop_assert!(kept <= 9 || is_master(kept));
        }

        #[test]
        fn prop_digit_sum_shrinks_multi_digit(n in 10u32..u32::MAX) {
            prop_assert!(digit_sum(n) < n);
        }
    }
}
