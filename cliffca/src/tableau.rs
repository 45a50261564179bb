//! Binary stabilizer tableaux: one row `[x₀ … x_{n−1} | z₀ … z_{n−1}]` per
//! generator.

use crate::StabilizerGenerator;
use binar::{BitMatrix, BitVec, BitwisePair, EchelonForm};
use laurent::periodic::laurent_to_polynomial;

/// Stacks the periodic images of the generators, in order.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn poly_to_binary_tableau(generators: &[StabilizerGenerator], n: usize) -> BitMatrix {
    let rows = generators.iter().map(|generator| {
        let x_bits = laurent_to_polynomial(&generator.x, n);
        let z_bits = laurent_to_polynomial(&generator.z, n);
        x_bits.concatenated(&z_bits)
    });
    BitMatrix::from_rows(rows.collect(), 2 * n)
}

/// Tableau of all `n` cyclic translates of one generator.
pub fn translated_tableau(generator: &StabilizerGenerator, n: usize) -> BitMatrix {
    poly_to_binary_tableau(&generator.translates(n), n)
}

/// Reduces `tableau` to reduced row echelon form in place and returns the
/// pivot columns. Rows are permuted and combined; use [`reduced`] to keep the
/// original.
pub fn rref_mod2(tableau: &mut BitMatrix) -> Vec<usize> {
    tableau.echelonize()
}

/// Reduced row echelon form of a copy of `tableau`.
pub fn reduced(tableau: &BitMatrix) -> EchelonForm {
    tableau.echelon_form()
}

/// Basis of `{v : tableau · v = 0}`, one row per free column.
pub fn nullspace_mod2(tableau: &BitMatrix) -> BitMatrix {
    tableau.kernel()
}

#[must_use]
pub fn rank_mod2(tableau: &BitMatrix) -> usize {
    tableau.rank()
}

/// `x_a · z_b + z_a · x_b`; zero exactly when the two Pauli strings commute.
///
/// # Panics
///
/// Panics if the rows have different or odd lengths.
#[must_use]
pub fn symplectic_inner_product(left: &BitVec, right: &BitVec) -> bool {
    assert_eq!(left.len(), right.len(), "tableau rows must have equal length");
    let n = site_count(left);
    let (left_x, left_z) = (left.extract(0, n), left.extract(n, n));
    let (right_x, right_z) = (right.extract(0, n), right.extract(n, n));
    left_x.dot(&right_z) ^ left_z.dot(&right_x)
}

/// `SΩ`: each row with its X and Z halves exchanged, so that
/// `(SΩ) · v` is the vector of symplectic products of `v` with the rows of `S`.
pub fn symplectic_swap(tableau: &BitMatrix) -> BitMatrix {
    let rows = tableau.rows().map(|row| {
        let n = site_count(row);
        row.extract(n, n).concatenated(&row.extract(0, n))
    });
    BitMatrix::from_rows(rows.collect(), tableau.column_count())
}

/// Number of sites on which the row acts as X, Y or Z.
#[must_use]
pub fn pauli_weight(row: &BitVec) -> usize {
    let n = site_count(row);
    row.extract(0, n).or_weight(&row.extract(n, n))
}

/// Sites on which the row acts nontrivially, as a length-`n` support.
pub fn site_support(row: &BitVec) -> BitVec {
    let n = site_count(row);
    &row.extract(0, n) | &row.extract(n, n)
}

fn site_count(row: &BitVec) -> usize {
    assert!(row.len() % 2 == 0, "tableau rows have an X half and a Z half");
    row.len() / 2
}
