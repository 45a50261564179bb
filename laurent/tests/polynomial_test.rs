use laurent::{GF2, LaurentError, LaurentPolynomial};
use proptest::prelude::*;

proptest! {
    #[test]
    fn additive_identity(poly in arbitrary_polynomial()) {
        assert_eq!(&poly + &LaurentPolynomial::zero(GF2), poly);
        assert_eq!(&LaurentPolynomial::zero(GF2) + &poly, poly);
    }

    #[test]
    fn multiplicative_identity(poly in arbitrary_polynomial()) {
        assert_eq!(poly.multiply(&LaurentPolynomial::monomial(0, 1, GF2)), poly);
    }

    #[test]
    fn characteristic_two(poly in arbitrary_polynomial()) {
        assert!((&poly + &poly).is_zero());
        assert_eq!(-&poly, poly);
    }

    #[test]
    fn ring_laws(left in arbitrary_polynomial(), middle in arbitrary_polynomial(), right in arbitrary_polynomial()) {
        assert_eq!(&left * &right, &right * &left);
        assert_eq!(&left + &right, &right + &left);
        let distributed = &(&left * &middle) + &(&left * &right);
        assert_eq!(&left * &(&middle + &right), distributed);
        assert_eq!(&(&left * &middle) * &right, &left * &(&middle * &right));
    }

    #[test]
    fn no_zero_coefficients(terms in prop::collection::vec((-6i64..6, -4i64..5), 0..10), modulus in 0u32..6) {
        let poly = LaurentPolynomial::from_terms(terms, modulus);
        for (_, coefficient) in poly.terms() {
            assert_ne!(coefficient, 0);
            if modulus > 0 {
                assert!((0..i64::from(modulus)).contains(&coefficient));
            }
        }
        assert_eq!(poly.is_zero(), poly.term_count() == 0);
    }

    #[test]
    fn substitute_inverse_is_multiplicative(left in arbitrary_polynomial(), right in arbitrary_polynomial()) {
        let product = &left * &right;
        assert_eq!(product.substitute_inverse(), &left.substitute_inverse() * &right.substitute_inverse());
        assert_eq!(product.substitute_inverse().substitute_inverse(), product);
    }

    #[test]
    fn shift_is_monomial_product(poly in arbitrary_polynomial(), shift in -10i64..10) {
        assert_eq!(poly.shifted(shift), &poly * &LaurentPolynomial::monomial(shift, 1, GF2));
        assert_eq!(poly.shifted(shift).shifted(-shift), poly);
    }

    #[test]
    fn exponent_bounds(poly in arbitrary_polynomial()) {
        let exponents: Vec<i64> = poly.exponents().collect();
        assert_eq!(poly.min_exponent(), exponents.first().copied());
        assert_eq!(poly.max_exponent(), exponents.last().copied());
        assert_eq!(poly.degree(), poly.max_exponent());
        assert_eq!(poly.weight(), exponents.len());
        if let Some(span) = poly.span() {
            assert!(span >= 0);
        }
    }

    #[test]
    fn monomials_are_single_terms(poly in arbitrary_polynomial()) {
        assert_eq!(poly.is_monomial(), poly.term_count() == 1);
    }

    #[test]
    fn display_parse(poly in arbitrary_polynomial()) {
        let parsed: LaurentPolynomial = poly.to_string().parse().unwrap();
        assert_eq!(parsed, poly);
    }
}

#[test]
fn default_is_binary_zero() {
    let default = LaurentPolynomial::default();
    assert_eq!(default, LaurentPolynomial::zero(GF2));
    let pair = LaurentPolynomial::from_exponents([0, 1]);
    assert_eq!(&default + &pair, pair);
    assert!((&default * &pair).is_zero());
}

#[test]
fn exponents_cancel_in_pairs() {
    let poly = LaurentPolynomial::from_exponents([0, 1, 1, 2, 2, 2]);
    assert_eq!(poly, LaurentPolynomial::from_exponents([0, 2]));
}

#[test]
fn integer_coefficients() {
    let left = LaurentPolynomial::from_terms([(0, 1), (1, -1)], 0);
    let right = LaurentPolynomial::from_terms([(0, 1), (1, 1)], 0);
    assert_eq!(&left * &right, LaurentPolynomial::from_terms([(0, 1), (2, -1)], 0));
    assert_eq!((&left - &left).to_string(), "0");
    assert_eq!(left.scaled(3).to_string(), "3 - 3x");
}

#[test]
fn reduction_changes_modulus() {
    let poly = LaurentPolynomial::from_terms([(-1, 3), (0, 2), (4, -5)], 0);
    assert_eq!(poly.with_modulus(GF2), LaurentPolynomial::from_exponents([-1, 4]));
    assert_eq!(poly.with_modulus(3), LaurentPolynomial::from_terms([(0, 2), (4, 1)], 3));
}

#[test]
fn display() {
    assert_eq!(LaurentPolynomial::from_exponents([2, -1, 0]).to_string(), "x^-1 + 1 + x^2");
    assert_eq!(LaurentPolynomial::from_exponents([1]).to_string(), "x");
    assert_eq!(LaurentPolynomial::zero(GF2).to_string(), "0");
}

#[test]
fn parse() {
    let poly: LaurentPolynomial = "x^-1 + 1 + x^2".parse().unwrap();
    assert_eq!(poly, LaurentPolynomial::from_exponents([-1, 0, 2]));
    let reduced: LaurentPolynomial = "3x + 2".parse().unwrap();
    assert_eq!(reduced, LaurentPolynomial::from_exponents([1]));
    assert_eq!("x^".parse::<LaurentPolynomial>(), Err(LaurentError::Parse("x^".to_owned())));
    assert!("1 + y".parse::<LaurentPolynomial>().is_err());
}

#[test]
#[should_panic(expected = "coefficient moduli")]
fn mixed_moduli() {
    let _ = &LaurentPolynomial::one(GF2) + &LaurentPolynomial::one(3);
}

fn arbitrary_polynomial() -> impl Strategy<Value = LaurentPolynomial> {
    prop::collection::vec(-8i64..8, 0..8).prop_map(LaurentPolynomial::from_exponents)
}
