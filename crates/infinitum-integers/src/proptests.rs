//! Property-based tests for the integer engine.
//!
//! Ring axioms plus differential checks against `dashu` as an oracle on
//! random multi-limb operands.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, NumError};

    // Decimal strings long enough to span several limbs.
    fn big_decimal() -> impl Strategy<Value = String> {
        "-?[1-9][0-9]{0,45}"
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -10_000i64..10_000i64
    }

    fn engine(s: &str) -> Integer {
        Integer::from_str_radix(s, 10).expect("strategy emits valid decimals")
    }

    fn oracle(s: &str) -> IBig {
        IBig::from_str_radix(s, 10).expect("strategy emits valid decimals")
    }

    proptest! {
        // Differential checks against dashu

        #[test]
        fn add_matches_oracle(a in big_decimal(), b in big_decimal()) {
            let ours = engine(&a) + engine(&b);
            let theirs = oracle(&a) + oracle(&b);
            prop_assert_eq!(ours.to_string(), theirs.to_string());
        }

        #[test]
        fn sub_matches_oracle(a in big_decimal(), b in big_decimal()) {
            let ours = engine(&a) - engine(&b);
            let theirs = oracle(&a) - oracle(&b);
            prop_assert_eq!(ours.to_string(), theirs.to_string());
        }

        #[test]
        fn mul_matches_oracle(a in big_decimal(), b in big_decimal()) {
            let ours = engine(&a) * engine(&b);
            let theirs = oracle(&a) * oracle(&b);
            prop_assert_eq!(ours.to_string(), theirs.to_string());
        }

        #[test]
        fn gcd_matches_oracle(a in big_decimal(), b in big_decimal()) {
            use dashu::base::Gcd;
            let ours = engine(&a).gcd(&engine(&b));
            let theirs = oracle(&a).gcd(oracle(&b));
            prop_assert_eq!(ours.to_string(), theirs.to_string());
        }

        // Division identity with the truncating sign convention, checked
        // by the engine itself rather than against an oracle so no other
        // library's rounding convention leaks in.

        #[test]
        fn division_identity(a in big_decimal(), b in big_decimal()) {
            let a = engine(&a);
            let b = engine(&b);
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&b * &q + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.signum() == a.signum());
        }

        // Ring axioms

        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn additive_inverse(a in big_decimal()) {
            let a = engine(&a);
            prop_assert_eq!(&a + &(-&a), Integer::zero());
        }

        // Sign and comparison laws

        #[test]
        fn abs_neg_laws(a in big_decimal()) {
            let a = engine(&a);
            prop_assert_eq!(a.abs(), (-&a).abs());
            prop_assert_eq!(-(-&a), a.clone());
        }

        #[test]
        fn cmp_antisymmetric(a in big_decimal(), b in big_decimal()) {
            let a = engine(&a);
            let b = engine(&b);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        // Gcd laws

        #[test]
        fn gcd_laws(a in big_decimal()) {
            let a = engine(&a);
            prop_assert_eq!(a.gcd(&Integer::zero()), a.abs());
            prop_assert!(a.gcd(&a).signum() >= 0);
        }

        // Round-trip across every radix

        #[test]
        fn radix_round_trip(a in big_decimal(), radix in 2u32..=36) {
            let a = engine(&a);
            let text = a.to_str_radix(radix);
            prop_assert_eq!(Integer::from_str_radix(&text, radix).unwrap(), a);
        }

        // Modexp agrees with the plain pow-then-reduce path

        #[test]
        fn modexp_matches_pow(base in -50i64..50, exp in 0u64..12, m in 1i64..1000) {
            let b = Integer::new(base);
            let m = Integer::new(m);
            let direct = b.modexp(&Integer::from(exp), &m).unwrap();
            let (_, mut expected) = b.pow(exp).div_rem(&m).unwrap();
            if expected.is_negative() {
                expected = &expected + &m;
            }
            prop_assert_eq!(direct, expected);
        }

        // Fixed-width conversion is exact or an error, never truncated

        #[test]
        fn i64_round_trip(v in any::<i64>()) {
            prop_assert_eq!(Integer::new(v).to_i64(), Ok(v));
        }

        #[test]
        fn u64_round_trip(v in any::<u64>()) {
            prop_assert_eq!(Integer::from_u64(v).to_u64(), Ok(v));
        }

        #[test]
        fn oversized_conversion_is_range(a in "[1-9][0-9]{25,40}") {
            let a = engine(&a);
            prop_assert_eq!(a.to_i64(), Err(NumError::Range));
            prop_assert_eq!(a.to_u64(), Err(NumError::Range));
        }
    }
}
