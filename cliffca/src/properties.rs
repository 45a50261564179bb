//! Algebraic checks on rules and stabilizer generators, for the infinite chain
//! and for a periodic chain of `n` sites.

use crate::{LatticeState, Result, RuleMatrix, StabilizerGenerator};
use binar::Bitwise;
use laurent::periodic::laurent_to_polynomial;
use laurent::{GF2, LaurentPolynomial};

/// `det M(x)` over GF(2).
pub fn determinant_of(rule: &RuleMatrix) -> LaurentPolynomial {
    rule.to_laurent(GF2).determinant()
}

/// A rule is reversible on the infinite chain exactly when its determinant is
/// a unit of GF(2)[x, x⁻¹], i.e. a monomial.
pub fn is_invertible(rule: &RuleMatrix) -> bool {
    determinant_of(rule).is_monomial()
}

/// `M(x⁻¹)ᵗ Ω M(x) = Ω` over GF(2).
pub fn is_symplectic_rule_matrix(rule: &RuleMatrix) -> bool {
    rule.to_laurent(GF2).is_symplectic()
}

/// The generator commutes with all of its translates on the infinite chain.
pub fn has_orthogonal_stabilizer(state: &LatticeState) -> bool {
    StabilizerGenerator::from_state(state).symplectic_self_product().is_zero()
}

/// The generator commutes with all of its translates on a periodic chain of
/// `n` sites: `S(z)` vanishes modulo `zᴺ + 1`.
///
/// # Errors
///
/// Returns an error unless `state` has exactly `n > 0` sites.
pub fn has_orthogonal_stabilizer_periodic(state: &LatticeState, n: usize) -> Result<bool> {
    state.check_size(n)?;
    let product = StabilizerGenerator::from_state(state).symplectic_self_product();
    Ok(laurent_to_polynomial(&product, n).is_zero())
}
