//! Property-based tests for the rational layer and the codec.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::codec;
    use crate::{Integer, NumError, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int())
            .prop_map(|(n, d)| Rational::from_i64(n, d).expect("non-zero denominator"))
    }

    proptest! {
        // Canonical form holds after every operation

        #[test]
        fn canonical_after_arithmetic(a in rational(), b in rational()) {
            for v in [&a + &b, &a - &b, &a * &b] {
                let num = v.numerator();
                let den = v.denominator();
                prop_assert!(den.signum() == 1);
                prop_assert!(num.abs().gcd(&den).is_one());
                if num.is_zero() {
                    prop_assert!(den.is_one());
                }
            }
        }

        #[test]
        fn canonical_after_division(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            let q = a.checked_div(&b).unwrap();
            prop_assert!(q.denominator().signum() == 1);
            prop_assert!(q.numerator().abs().gcd(&q.denominator()).is_one());
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn multiplicative_inverse(a in rational()) {
            prop_assume!(!a.is_zero());
            let product = &a * &a.recip().unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn div_undoes_mul(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
        }

        // Sign and comparison laws

        #[test]
        fn abs_neg_cmp_laws(a in rational(), b in rational()) {
            prop_assert_eq!(a.abs(), (-&a).abs());
            prop_assert_eq!(-(-&a), a.clone());
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        // Round-trip across every radix

        #[test]
        fn codec_round_trip(a in rational(), radix in 2u32..=36) {
            let text = codec::format_radix(&a, radix);
            prop_assert_eq!(codec::parse_radix(&text, radix).unwrap(), a);
        }

        // Integer-only gating never yields a numeric result

        #[test]
        fn gate_rejects_non_integers(n in small_int(), d in 2i64..1000) {
            prop_assume!(n % d != 0);
            let v = Rational::from_i64(n, d).unwrap();
            let two = Rational::from(2i64);
            prop_assert_eq!(v.gcd(&two), Err(NumError::TypeMismatch));
            prop_assert_eq!(v.pow(2), Err(NumError::TypeMismatch));
            prop_assert_eq!(v.modexp(&two, &two), Err(NumError::TypeMismatch));
            prop_assert_eq!(v.to_i64(), Err(NumError::TypeMismatch));
            prop_assert_eq!(v.to_u64(), Err(NumError::TypeMismatch));
        }

        // Exact float conversion round-trips through the float

        #[test]
        fn f64_exact_is_exact(n in -1_000_000i32..1_000_000, shift in 0u32..20) {
            // Dyadic rationals convert exactly in both directions.
            let v = f64::from(n) / f64::from(1u32 << shift);
            let r = Rational::from_f64_exact(v).unwrap();
            let expected = Rational::new(
                Integer::new(i64::from(n)),
                Integer::from_u64(1u64 << shift),
            )
            .unwrap();
            prop_assert_eq!(r, expected);
        }
    }
}
