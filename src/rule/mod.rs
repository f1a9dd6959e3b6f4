// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conjectured closed form for d_angle(n).
//!
//! ```text
//! a(n) = 0          n even
//!        3n − 2     n odd, n mod 10 ≠ 9
//!        3n + 10    n odd, n mod 10 = 9
//! ```
//!
//! The formula was fitted to the computed counts for n = 1..=200
//! ([`RULE_VERIFIED_MAX_N`](crate::geometry::constants::RULE_VERIFIED_MAX_N))
//! and has no proof. It is a comparison oracle for the engine, never a
//! substitute for it, and is kept exactly as fitted.

/// The conjectured value a(n). Values for `n == 0` carry no meaning.
pub fn a_rule(n: usize) -> usize {
    if n % 2 == 0 {
        return 0;
    }
    let extra = if n % 10 == 9 { 12 } else { 0 };
    3 * n - 2 + extra
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_literal_values() {
        assert_eq!(a_rule(1), 1);
        assert_eq!(a_rule(3), 7);
        assert_eq!(a_rule(9), 37);
        assert_eq!(a_rule(10), 0);
        assert_eq!(a_rule(19), 67);
        assert_eq!(a_rule(199), 607);
        assert_eq!(a_rule(200), 0);
    }

    proptest! {
        #[test]
        fn even_n_is_zero(half in 1usize..10_000) {
            prop_assert_eq!(a_rule(2 * half), 0);
        }

        #[test]
        fn odd_n_is_one_mod_three(half in 0usize..10_000) {
            let n = 2 * half + 1;
            prop_assert_eq!(a_rule(n) % 3, 1);
            prop_assert!(a_rule(n) >= 3 * n - 2);
        }
    }
}
