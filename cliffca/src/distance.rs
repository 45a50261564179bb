//! Number of logical qubits and code distance of the cyclic code generated by
//! all translates of one stabilizer generator.

use crate::logical::LogicalOperators;
use crate::tableau::{pauli_weight, reduced};
use crate::{LatticeState, Result, StabilizerGenerator};
use binar::{BitMatrix, BitVec, Bitwise};
use laurent::LaurentPolynomial;
use laurent::periodic::{gcd, gcd_with_periodicity, laurent_divide, laurent_to_polynomial, periodic_modulus};

/// Largest `k` for which [`support_distance`] enumerates the `2ᵏ − 1` nonzero
/// annihilator words.
pub const SUPPORT_DISTANCE_MAX_QUBITS: usize = 20;

/// Which branch produced a [`CodeDistance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DistanceMethod {
    NoLogicalQubits,
    PureGenerator,
    Residual,
}

/// The reported distance together with both closed-form computations it is
/// checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeDistance {
    method: DistanceMethod,
    distance: usize,
    residual: Option<usize>,
    support: Option<usize>,
}

impl CodeDistance {
    #[must_use]
    pub fn value(&self) -> usize {
        self.distance
    }

    #[must_use]
    pub fn method(&self) -> DistanceMethod {
        self.method
    }

    /// Minimum rotation weight of the residual `(zᴺ + 1) / d₁ᴺ(z)`.
    #[must_use]
    pub fn residual(&self) -> Option<usize> {
        self.residual
    }

    /// Minimum weight of a nonzero word annihilating `d₁ᴺ(z)`, when it was
    /// computed.
    #[must_use]
    pub fn support(&self) -> Option<usize> {
        self.support
    }

    /// False only when both Z-channel formulas ran and produced different
    /// values.
    #[must_use]
    pub fn agrees(&self) -> bool {
        match (self.residual, self.support) {
            (Some(residual), Some(support)) => residual == support,
            _ => true,
        }
    }
}

/// `d₁ᴺ(z) = gcd(gcd(Z(z), X(z)), zᴺ + 1)`.
pub fn finite_gcd(generator: &StabilizerGenerator, n: usize) -> LaurentPolynomial {
    gcd_with_periodicity(&gcd(&generator.z, &generator.x), n)
}

/// `k`, the degree of [`finite_gcd`].
///
/// # Errors
///
/// Returns an error unless `state` has exactly `n > 0` sites.
pub fn calculate_logical_qubits(state: &LatticeState, n: usize) -> Result<usize> {
    state.check_size(n)?;
    Ok(logical_qubits_of(&StabilizerGenerator::from_state(state), n))
}

pub(crate) fn logical_qubits_of(generator: &StabilizerGenerator, n: usize) -> usize {
    finite_gcd(generator, n)
        .degree()
        .and_then(|degree| usize::try_from(degree).ok())
        .unwrap_or(0)
}

/// `R(z) = (zᴺ + 1) / d₁ᴺ(z)`, whose translates span the Z-type logical
/// operators.
///
/// # Errors
///
/// Propagates [`LaurentError`](laurent::LaurentError) if the division is not
/// exact, which would indicate a broken GCD.
pub fn residual_polynomial(generator: &StabilizerGenerator, n: usize) -> Result<LaurentPolynomial> {
    Ok(laurent_divide(&periodic_modulus(n), &finite_gcd(generator, n))?)
}

/// Minimum nonzero weight over the `n` cyclic rotations of the residual; zero
/// when there are no logical qubits.
///
/// # Errors
///
/// Returns an error unless `state` has exactly `n > 0` sites.
pub fn residual_distance(state: &LatticeState, n: usize) -> Result<usize> {
    state.check_size(n)?;
    let generator = StabilizerGenerator::from_state(state);
    if logical_qubits_of(&generator, n) == 0 {
        return Ok(0);
    }
    residual_scan(&generator, n)
}

fn residual_scan(generator: &StabilizerGenerator, n: usize) -> Result<usize> {
    let bits = laurent_to_polynomial(&residual_polynomial(generator, n)?, n);
    let mut minimum: Option<usize> = None;
    for shift in 0..n {
        let weight = bits.rotated(shift).weight();
        if weight > 0 && minimum.is_none_or(|current| weight < current) {
            minimum = Some(weight);
            if weight == 1 {
                break;
            }
        }
    }
    Ok(minimum.unwrap_or(0))
}

/// Z-channel distance read directly off supports: the minimum weight of a
/// nonzero `c` in GF(2)[z]/(zᴺ + 1) with `c(z)·d₁ᴺ(z) = 0`.
///
/// The annihilator is the null space of the circulant of `d₁ᴺ`, found by row
/// reduction and enumerated in Gray-code order. It is computed without the
/// residual division, so it checks [`residual_distance`] independently.
///
/// Returns `Ok(None)` when `k` exceeds [`SUPPORT_DISTANCE_MAX_QUBITS`] and
/// `Ok(Some(0))` when there are no logical qubits.
///
/// # Errors
///
/// Returns an error unless `state` has exactly `n > 0` sites.
pub fn support_distance(state: &LatticeState, n: usize) -> Result<Option<usize>> {
    state.check_size(n)?;
    let generator = StabilizerGenerator::from_state(state);
    let k = logical_qubits_of(&generator, n);
    if k == 0 {
        return Ok(Some(0));
    }
    Ok(support_scan(&generator, n, k))
}

fn support_scan(generator: &StabilizerGenerator, n: usize, k: usize) -> Option<usize> {
    if k > SUPPORT_DISTANCE_MAX_QUBITS {
        return None;
    }
    let divisor = laurent_to_polynomial(&finite_gcd(generator, n), n);
    let circulant = BitMatrix::from_rows((0..n).map(|shift| divisor.rotated(shift)).collect(), n);
    let annihilator = circulant.transposed().kernel();
    let basis: Vec<&BitVec> = annihilator.rows().collect();

    let mut word = BitVec::zeros(n);
    let mut minimum: Option<usize> = None;
    for step in 1u64..1 << basis.len() {
        word ^= basis[step.trailing_zeros() as usize];
        let weight = word.weight();
        minimum = Some(minimum.map_or(weight, |current| current.min(weight)));
    }
    minimum
}

/// Code distance of the translates of the generator on a periodic chain.
///
/// Zero without logical qubits, 2 for a generator with only X or only Z
/// components, otherwise the residual rotation scan. The support-based value
/// is computed alongside and a disagreement is logged.
///
/// # Errors
///
/// Returns an error unless `state` has exactly `n > 0` sites.
pub fn calculate_code_distance(state: &LatticeState, n: usize) -> Result<CodeDistance> {
    code_distance(state, n, true)
}

pub(crate) fn code_distance(state: &LatticeState, n: usize, cross_check: bool) -> Result<CodeDistance> {
    state.check_size(n)?;
    let generator = StabilizerGenerator::from_state(state);
    let k = logical_qubits_of(&generator, n);
    if k == 0 {
        return Ok(CodeDistance {
            method: DistanceMethod::NoLogicalQubits,
            distance: 0,
            residual: None,
            support: None,
        });
    }

    let residual = residual_scan(&generator, n)?;
    let support = if cross_check {
        support_scan(&generator, n, k)
    } else {
        None
    };
    let (method, distance) = if generator.is_pure() {
        (DistanceMethod::PureGenerator, 2)
    } else {
        (DistanceMethod::Residual, residual)
    };
    let result = CodeDistance {
        method,
        distance,
        residual: Some(residual),
        support,
    };
    if !result.agrees() {
        tracing::warn!(residual, support = ?result.support, k, n, "distance_formulas_disagree");
    }
    Ok(result)
}

/// Minimum Pauli weight over all products of a stabilizer subset with a
/// nonzero combination of the logical operators.
///
/// Products are visited in Gray-code order, one row addition per step.
/// Returns `None` when there are no logical operators or when the stabilizer
/// rank plus the operator count exceeds `limit`.
#[must_use]
pub fn exhaustive_distance(tableau: &BitMatrix, logicals: &LogicalOperators, limit: usize) -> Option<usize> {
    let operators = logicals.flattened();
    let echelon = reduced(tableau);
    let stabilizers = echelon.matrix().rows().take(echelon.rank());
    let generators: Vec<&BitVec> = operators.iter().chain(stabilizers).collect();
    if operators.is_empty() || generators.len() > limit.min(63) {
        return None;
    }

    let logical_mask = (1u64 << operators.len()) - 1;
    let mut product = BitVec::zeros(tableau.column_count());
    let mut minimum: Option<usize> = None;
    for step in 1u64..1 << generators.len() {
        product ^= generators[step.trailing_zeros() as usize];
        let gray = step ^ (step >> 1);
        if gray & logical_mask != 0 {
            let weight = pauli_weight(&product);
            minimum = Some(minimum.map_or(weight, |current| current.min(weight)));
        }
    }
    minimum
}
