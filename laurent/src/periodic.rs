//! Euclidean GCD over GF(2)[x, x⁻¹] and the fold into the periodic quotient
//! ring GF(2)[x]/(xᴺ + 1).

use crate::{GF2, LaurentError, LaurentPolynomial, Result};
use binar::{BitVec, Bitwise, BitwiseMut};

/// Greatest common divisor over GF(2)[x, x⁻¹].
///
/// Coefficients are read modulo 2. Each step shifts the operand with the
/// smaller highest exponent up until the leading terms align and adds it into
/// the other operand, cancelling that operand's leading term. Shifts are never
/// negative, so the lowest exponent seen is bounded below while the highest
/// exponent of the reduced operand strictly decreases.
///
/// When the highest exponents tie, `a` is reduced.
///
/// ```
/// use laurent::LaurentPolynomial;
/// use laurent::periodic::gcd;
///
/// // (1 + x)² = 1 + x², (1 + x)(1 + x + x²) = 1 + x³
/// let left = LaurentPolynomial::from_exponents([0, 2]);
/// let right = LaurentPolynomial::from_exponents([0, 3]);
/// assert_eq!(gcd(&left, &right), LaurentPolynomial::from_exponents([0, 1]));
/// ```
pub fn gcd(a: &LaurentPolynomial, b: &LaurentPolynomial) -> LaurentPolynomial {
    let mut a = a.with_modulus(GF2);
    let mut b = b.with_modulus(GF2);
    loop {
        let (Some(a_degree), Some(b_degree)) = (a.max_exponent(), b.max_exponent()) else {
            return if a.is_zero() { b } else { a };
        };
        if a_degree >= b_degree {
            a += &b.shifted(a_degree - b_degree);
        } else {
            b += &a.shifted(b_degree - a_degree);
        }
    }
}

/// `xᴺ + 1`, the GF(2) image of `xᴺ − 1`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn periodic_modulus(n: usize) -> LaurentPolynomial {
    assert!(n > 0, "lattice size must be positive");
    LaurentPolynomial::from_exponents([0, exponent_of(n)])
}

/// `gcd(poly, xᴺ + 1)`, as an ordinary polynomial with a constant term.
///
/// Both `poly` and the result are multiplied by the monomial that moves their
/// lowest exponent to zero. This only changes them by a unit, so the result
/// divides `xᴺ + 1` and its highest exponent is its degree.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn gcd_with_periodicity(poly: &LaurentPolynomial, n: usize) -> LaurentPolynomial {
    lowest_to_zero(&gcd(&lowest_to_zero(poly), &periodic_modulus(n)))
}

/// Exact division in the Laurent ring.
///
/// Both operands are shifted so their lowest exponent is zero, divided by
/// polynomial long division, and the quotient is shifted back by the
/// difference of the two lowest exponents.
///
/// # Errors
///
/// Returns [`LaurentError::ZeroDivisor`] for a zero divisor,
/// [`LaurentError::NonMonicDivisor`] when the leading coefficient of the
/// divisor is not one, and [`LaurentError::InexactDivision`] when a remainder
/// survives.
///
/// # Panics
///
/// Panics if the operands have different moduli.
pub fn laurent_divide(dividend: &LaurentPolynomial, divisor: &LaurentPolynomial) -> Result<LaurentPolynomial> {
    assert_eq!(dividend.modulus(), divisor.modulus(), "cannot divide polynomials with different moduli");
    let (Some(divisor_low), Some(leading)) = (divisor.min_exponent(), divisor.leading_coefficient()) else {
        return Err(LaurentError::ZeroDivisor);
    };
    if leading != 1 {
        return Err(LaurentError::NonMonicDivisor {
            divisor: divisor.clone(),
        });
    }
    let Some(dividend_low) = dividend.min_exponent() else {
        return Ok(LaurentPolynomial::zero(dividend.modulus()));
    };

    let normalized_divisor = divisor.shifted(-divisor_low);
    let divisor_degree = normalized_divisor.max_exponent().unwrap_or(0);
    let mut remainder = dividend.shifted(-dividend_low);
    let mut quotient = LaurentPolynomial::zero(dividend.modulus());
    while let (Some(degree), Some(coefficient)) = (remainder.max_exponent(), remainder.leading_coefficient()) {
        if degree < divisor_degree {
            break;
        }
        let step = LaurentPolynomial::monomial(degree - divisor_degree, coefficient, dividend.modulus());
        remainder = &remainder - &(&step * &normalized_divisor);
        quotient += &step;
    }

    if !remainder.is_zero() {
        return Err(LaurentError::InexactDivision {
            dividend: dividend.clone(),
            divisor: divisor.clone(),
            remainder: remainder.shifted(dividend_low),
        });
    }
    Ok(quotient.shifted(dividend_low - divisor_low))
}

/// Folds every exponent `e` to `e mod n` and accumulates coefficients modulo
/// 2, giving the dense image in GF(2)[x]/(xᴺ + 1).
///
/// ```
/// use laurent::LaurentPolynomial;
/// use laurent::periodic::laurent_to_polynomial;
///
/// let poly = LaurentPolynomial::from_exponents([-1, 0, 4]);
/// assert_eq!(laurent_to_polynomial(&poly, 4).to_string(), "0001");
/// ```
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn laurent_to_polynomial(poly: &LaurentPolynomial, n: usize) -> BitVec {
    assert!(n > 0, "lattice size must be positive");
    let mut bits = BitVec::zeros(n);
    for (exponent, coefficient) in poly.terms() {
        if coefficient.rem_euclid(2) == 1 {
            bits.negate_index(fold(exponent, n));
        }
    }
    bits
}

/// The GF(2) polynomial with a term `xⁱ` for every set bit `i`.
pub fn polynomial_from_bits(bits: &BitVec) -> LaurentPolynomial {
    LaurentPolynomial::from_exponents(bits.support().map(exponent_of))
}

/// Canonical representative of `poly` modulo `xᴺ + 1`, with exponents in `0..n`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn reduce_periodic(poly: &LaurentPolynomial, n: usize) -> LaurentPolynomial {
    polynomial_from_bits(&laurent_to_polynomial(poly, n))
}

/// Multiplication by `x^shift` in the periodic ring; negative shifts rotate
/// towards lower indices.
pub fn cyclic_shift(bits: &BitVec, shift: i64) -> BitVec {
    if bits.is_empty() {
        return bits.clone();
    }
    bits.rotated(fold(shift, bits.len()))
}

fn lowest_to_zero(poly: &LaurentPolynomial) -> LaurentPolynomial {
    match poly.min_exponent() {
        Some(lowest) => poly.shifted(-lowest),
        None => poly.clone(),
    }
}

fn fold(exponent: i64, n: usize) -> usize {
    let folded = exponent.rem_euclid(exponent_of(n));
    usize::try_from(folded).unwrap_or_default()
}

fn exponent_of(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_handles_negative_exponents() {
        assert_eq!(fold(-1, 5), 4);
        assert_eq!(fold(-10, 5), 0);
        assert_eq!(fold(7, 5), 2);
    }

    #[test]
    fn gcd_reduces_a_on_ties() {
        let a = LaurentPolynomial::from_exponents([0, 2]);
        let b = LaurentPolynomial::from_exponents([1, 2]);
        // a + b = 1 + x, then b + x·(1 + x) = 0
        assert_eq!(gcd(&a, &b), LaurentPolynomial::from_exponents([0, 1]));
        assert_eq!(gcd(&b, &a), LaurentPolynomial::from_exponents([0, 1]));
    }
}
