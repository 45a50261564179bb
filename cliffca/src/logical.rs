//! Logical operators of a stabilizer tableau and the half-chain entanglement
//! of its stabilizer state.

use crate::tableau::{nullspace_mod2, site_support, symplectic_inner_product, symplectic_swap};
use binar::{BitMatrix, BitVec, Bitwise, EchelonForm};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// A symplectic-conjugate pair: `⟨x, z⟩ = 1`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogicalPair {
    pub x: BitVec,
    pub z: BitVec,
}

/// Result of [`find_logical_operators`].
///
/// `Partial` records how many pairs were expected when the pairing search
/// stopped short.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LogicalOperators {
    Complete(Vec<LogicalPair>),
    Partial { pairs: Vec<LogicalPair>, expected: usize },
}

impl LogicalOperators {
    #[must_use]
    pub fn pairs(&self) -> &[LogicalPair] {
        match self {
            LogicalOperators::Complete(pairs) | LogicalOperators::Partial { pairs, .. } => pairs,
        }
    }

    /// Operators in the order `X₁, Z₁, X₂, Z₂, …`.
    #[must_use]
    pub fn flattened(&self) -> Vec<BitVec> {
        self.pairs()
            .iter()
            .flat_map(|pair| [pair.x.clone(), pair.z.clone()])
            .collect()
    }

    /// Number of operators found, twice the number of pairs.
    #[must_use]
    pub fn found(&self) -> usize {
        2 * self.pairs().len()
    }

    #[must_use]
    pub fn expected(&self) -> usize {
        match self {
            LogicalOperators::Complete(pairs) => 2 * pairs.len(),
            LogicalOperators::Partial { expected, .. } => 2 * expected,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, LogicalOperators::Complete(_))
    }
}

/// Finds `k` conjugate pairs of logical operators for the stabilizer rows of
/// `tableau`.
///
/// The centralizer of the stabilizer is the null space of `SΩ`. Centralizer
/// vectors are kept greedily while they enlarge the span of the stabilizer
/// rows, until `2k` are kept. The kept pool is then paired by symplectic
/// Gram-Schmidt: the first vector becomes `Xᵢ`, the first later vector with
/// `⟨Xᵢ, ·⟩ = 1` becomes `Zᵢ`, and every remaining vector `v` is replaced by
/// `v + ⟨v, Zᵢ⟩Xᵢ + ⟨v, Xᵢ⟩Zᵢ`. A vector with no partner is set aside.
///
/// The pairing search only looks forward, so it can miss a partner reachable
/// through a set-aside vector; the shortfall is reported as
/// [`LogicalOperators::Partial`].
///
/// # Panics
///
/// Panics if the tableau has an odd number of columns.
#[tracing::instrument(skip(tableau), fields(rows = tableau.row_count(), columns = tableau.column_count()))]
pub fn find_logical_operators(tableau: &BitMatrix, k: usize) -> LogicalOperators {
    let pool = independent_centralizer_vectors(tableau, 2 * k);
    tracing::debug!(extensions = pool.len(), "centralizer_extended");

    let mut pool: VecDeque<BitVec> = pool.into_iter().collect();
    let mut pairs = Vec::with_capacity(k);
    let mut unpaired = 0usize;
    while pairs.len() < k {
        let Some(x) = pool.pop_front() else {
            break;
        };
        if x.is_zero() {
            continue;
        }
        let Some(partner) = pool.iter().position(|candidate| symplectic_inner_product(&x, candidate)) else {
            unpaired += 1;
            continue;
        };
        let Some(z) = pool.remove(partner) else {
            break;
        };
        for vector in &mut pool {
            let x_coefficient = symplectic_inner_product(vector, &z);
            let z_coefficient = symplectic_inner_product(vector, &x);
            if x_coefficient {
                *vector ^= &x;
            }
            if z_coefficient {
                *vector ^= &z;
            }
        }
        pairs.push(LogicalPair { x, z });
    }

    if pairs.len() == k {
        LogicalOperators::Complete(pairs)
    } else {
        tracing::warn!(found = 2 * pairs.len(), expected = 2 * k, unpaired, "logical_operators_incomplete");
        LogicalOperators::Partial { pairs, expected: k }
    }
}

/// Up to `limit` centralizer vectors that are independent of each other and of
/// the stabilizer rows, in null-space basis order.
fn independent_centralizer_vectors(tableau: &BitMatrix, limit: usize) -> Vec<BitVec> {
    let centralizer = nullspace_mod2(&symplectic_swap(tableau));
    let mut span = EchelonForm::new(tableau.clone());
    let mut kept = Vec::with_capacity(limit);
    for candidate in centralizer.rows() {
        if kept.len() == limit {
            break;
        }
        if span.spans(candidate) {
            continue;
        }
        let mut extended = span.matrix().clone();
        extended.push_row(candidate.clone());
        span = EchelonForm::new(extended);
        kept.push(candidate.clone());
    }
    kept
}

/// Half the number of rows that act on both halves of the chain, split at
/// site `n / 2`.
///
/// With `include_z_logicals`, logical operators with no X component are
/// counted alongside the stabilizer rows.
#[must_use]
pub fn compute_entanglement(tableau: &BitMatrix, logicals: &LogicalOperators, include_z_logicals: bool) -> usize {
    let z_logicals: SmallVec<[BitVec; 4]> = if include_z_logicals {
        logicals
            .flattened()
            .into_iter()
            .filter(|operator| operator.extract(0, operator.len() / 2).is_zero())
            .collect()
    } else {
        SmallVec::new()
    };
    let crossing = tableau
        .rows()
        .chain(z_logicals.iter())
        .filter(|row| crosses_cut(row))
        .count();
    crossing / 2
}

fn crosses_cut(row: &BitVec) -> bool {
    let support = site_support(row);
    let cut = support.len() / 2;
    match (support.min_support(), support.max_support()) {
        (Some(first), Some(last)) => first < cut && last >= cut,
        _ => false,
    }
}
