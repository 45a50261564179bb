use binar::{BitVec, Bitwise};
use itertools::iproduct;
use laurent::periodic::{
    cyclic_shift, gcd, gcd_with_periodicity, laurent_divide, laurent_to_polynomial, periodic_modulus,
    polynomial_from_bits, reduce_periodic,
};
use laurent::{GF2, LaurentError, LaurentPolynomial};
use proptest::prelude::*;

proptest! {
    #[test]
    fn gcd_with_zero(poly in nonzero_polynomial()) {
        let zero = LaurentPolynomial::zero(GF2);
        assert_eq!(gcd(&poly, &zero), poly);
        assert_eq!(gcd(&zero, &poly), poly);
    }

    #[test]
    fn gcd_divides_both(left in arbitrary_polynomial(), right in nonzero_polynomial()) {
        let divisor = gcd(&left, &right);
        assert!(!divisor.is_zero());
        assert!(laurent_divide(&left, &divisor).is_ok());
        assert!(laurent_divide(&right, &divisor).is_ok());
    }

    #[test]
    fn common_factor_survives(factor in nonzero_polynomial(), left in nonzero_polynomial(), right in nonzero_polynomial()) {
        let divisor = gcd(&(&factor * &left), &(&factor * &right));
        assert!(laurent_divide(&divisor, &factor).is_ok());
    }

    #[test]
    fn division_inverts_multiplication(quotient in arbitrary_polynomial(), divisor in nonzero_polynomial()) {
        let product = &quotient * &divisor;
        assert_eq!(laurent_divide(&product, &divisor), Ok(quotient));
    }

    #[test]
    fn periodic_gcd_divides_modulus(poly in arbitrary_polynomial(), n in 1usize..24) {
        let divisor = gcd_with_periodicity(&poly, n);
        let quotient = laurent_divide(&periodic_modulus(n), &divisor).unwrap();
        assert_eq!(&quotient * &divisor, periodic_modulus(n));
        assert_eq!(divisor.min_exponent(), Some(0));
        assert!(divisor.max_exponent().unwrap() <= i64::try_from(n).unwrap());
    }

    #[test]
    fn fold_is_a_ring_map(left in arbitrary_polynomial(), right in arbitrary_polynomial(), n in 1usize..16) {
        let sum = laurent_to_polynomial(&(&left + &right), n);
        assert_eq!(sum, &laurent_to_polynomial(&left, n) ^ &laurent_to_polynomial(&right, n));
        let product = reduce_periodic(&(&left * &right), n);
        let folded_product = reduce_periodic(&(&reduce_periodic(&left, n) * &reduce_periodic(&right, n)), n);
        assert_eq!(product, folded_product);
    }

    #[test]
    fn fold_respects_period(poly in arbitrary_polynomial(), n in 1usize..16, periods in -3i64..3) {
        let shift = periods * i64::try_from(n).unwrap();
        assert_eq!(laurent_to_polynomial(&poly.shifted(shift), n), laurent_to_polynomial(&poly, n));
    }

    #[test]
    fn bits_to_polynomial(bits in prop::collection::vec(any::<bool>(), 1..40)) {
        let bits: BitVec = bits.into_iter().collect();
        let poly = polynomial_from_bits(&bits);
        assert_eq!(poly.weight(), bits.weight());
        assert_eq!(laurent_to_polynomial(&poly, bits.len()), bits);
    }
}

#[test]
fn modulus_folds_to_zero() {
    for n in 1..20 {
        assert!(laurent_to_polynomial(&periodic_modulus(n), n).is_zero());
    }
}

#[test]
fn shift_matches_fold() {
    let poly = LaurentPolynomial::from_exponents([-2, 0, 3]);
    for (n, shift) in iproduct!(1usize..12, -6i64..=6) {
        let expected = laurent_to_polynomial(&poly.shifted(shift), n);
        assert_eq!(cyclic_shift(&laurent_to_polynomial(&poly, n), shift), expected);
    }
}

#[test]
fn periodic_gcd_of_adjacent_pair() {
    // 1 + x divides xᴺ + 1 for every N
    let pair = LaurentPolynomial::from_exponents([0, 1]);
    for n in 2..16 {
        assert_eq!(gcd_with_periodicity(&pair, n), pair);
        assert_eq!(gcd_with_periodicity(&pair.shifted(5), n), pair);
    }
}

#[test]
fn periodic_gcd_of_single_site() {
    let single = LaurentPolynomial::from_exponents([3]);
    assert_eq!(gcd_with_periodicity(&single, 8), LaurentPolynomial::one(GF2));
}

#[test]
fn periodic_gcd_of_zero() {
    assert_eq!(gcd_with_periodicity(&LaurentPolynomial::zero(GF2), 6), periodic_modulus(6));
}

#[test]
fn cyclotomic_factor() {
    // x⁶ + 1 = (1 + x)² (1 + x + x²)²
    let trinomial = LaurentPolynomial::from_exponents([0, 1, 2]);
    assert_eq!(gcd_with_periodicity(&trinomial, 6), trinomial);
    assert_eq!(gcd_with_periodicity(&trinomial, 5), LaurentPolynomial::one(GF2));
    let quotient = laurent_divide(&periodic_modulus(6), &trinomial).unwrap();
    assert_eq!(quotient, LaurentPolynomial::from_exponents([0, 1, 3, 4]));
}

#[test]
fn division_tracks_lowest_exponents() {
    let dividend = LaurentPolynomial::from_exponents([-3, -1]);
    let divisor = LaurentPolynomial::from_exponents([2, 3]);
    let quotient = laurent_divide(&dividend, &divisor).unwrap();
    assert_eq!(&quotient * &divisor, dividend);
    assert_eq!(quotient, LaurentPolynomial::from_exponents([-5, -4]));
}

#[test]
fn inexact_division() {
    let dividend = LaurentPolynomial::from_exponents([0, 1, 2]);
    let divisor = LaurentPolynomial::from_exponents([0, 1]);
    assert_eq!(
        laurent_divide(&dividend, &divisor),
        Err(LaurentError::InexactDivision {
            dividend: dividend.clone(),
            divisor: divisor.clone(),
            remainder: LaurentPolynomial::one(GF2),
        })
    );
}

#[test]
fn division_preconditions() {
    let dividend = LaurentPolynomial::from_exponents([0, 1]);
    assert_eq!(laurent_divide(&dividend, &LaurentPolynomial::zero(GF2)), Err(LaurentError::ZeroDivisor));
    let integer_dividend = LaurentPolynomial::from_terms([(0, 2), (1, 4)], 0);
    let non_monic = LaurentPolynomial::from_terms([(0, 1), (1, 2)], 0);
    assert!(matches!(
        laurent_divide(&integer_dividend, &non_monic),
        Err(LaurentError::NonMonicDivisor { .. })
    ));
    assert_eq!(
        laurent_divide(&LaurentPolynomial::zero(GF2), &dividend),
        Ok(LaurentPolynomial::zero(GF2))
    );
}

#[test]
fn integer_division() {
    // (1 - x)(1 + x + x²) = 1 - x³
    let dividend = LaurentPolynomial::from_terms([(0, 1), (3, -1)], 0);
    let divisor = LaurentPolynomial::from_terms([(0, 1), (1, 1), (2, 1)], 0);
    let quotient = laurent_divide(&dividend, &divisor).unwrap();
    assert_eq!(quotient, LaurentPolynomial::from_terms([(0, 1), (1, -1)], 0));
}

fn arbitrary_polynomial() -> impl Strategy<Value = LaurentPolynomial> {
    prop::collection::vec(-6i64..10, 0..8).prop_map(LaurentPolynomial::from_exponents)
}

fn nonzero_polynomial() -> impl Strategy<Value = LaurentPolynomial> {
    arbitrary_polynomial().prop_filter("nonzero", |poly| !poly.is_zero())
}
