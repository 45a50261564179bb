use crate::{BitMatrix, BitVec, Bitwise, BitwiseMut};
use sorted_iter::SortedIterator;
use sorted_iter::assume::AssumeSortedByItemExt;

/// A matrix in reduced row echelon form (RREF) together with its pivot columns.
///
/// `EchelonForm` owns its reduced copy, so the matrix it was built from is
/// never observed half-reduced. Use [`BitMatrix::echelonize`] to reduce in place
/// instead.
///
/// # Example
///
/// ```
/// use binar::{BitMatrix, BitVec, EchelonForm};
///
/// let m: BitMatrix = "110|011|101".parse().unwrap();
/// let echelon = EchelonForm::new(m);
/// assert_eq!(echelon.rank(), 2);
/// assert_eq!(echelon.pivots(), &[0, 1]);
///
/// let kernel = echelon.kernel();
/// assert_eq!(kernel.row_count(), 1);
/// assert_eq!(kernel.row(0).to_string(), "111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchelonForm {
    matrix: BitMatrix,
    pivots: Vec<usize>,
}

impl EchelonForm {
    #[must_use]
    pub fn new(mut matrix: BitMatrix) -> Self {
        let pivots = echelonize(&mut matrix);
        Self { matrix, pivots }
    }

    #[must_use]
    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    /// Column indices of the pivot positions (rank profile), in row order.
    #[must_use]
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Non-pivot columns, ascending.
    #[must_use]
    pub fn free_columns(&self) -> Vec<usize> {
        let mut sorted_pivots = self.pivots.clone();
        sorted_pivots.sort_unstable();
        complement(&sorted_pivots, self.matrix.column_count())
    }

    /// Reduces `vector` against the pivot rows. The result is zero iff `vector`
    /// lies in the row space.
    ///
    /// # Panics
    ///
    /// Panics if the vector length differs from the column count.
    pub fn reduce(&self, vector: &BitVec) -> BitVec {
        assert_eq!(vector.len(), self.matrix.column_count());
        let mut reduced = vector.clone();
        for (row_index, pivot) in self.pivots.iter().enumerate() {
            if reduced.index(*pivot) {
                reduced ^= self.matrix.row(row_index);
            }
        }
        reduced
    }

    #[must_use]
    pub fn spans(&self, vector: &BitVec) -> bool {
        self.reduce(vector).is_zero()
    }

    /// Basis of the null space `{v : M v = 0}`, one row per free column.
    ///
    /// The basis vector for free column `f` has a one at `f`, and at each pivot
    /// column `p` the entry of the pivot row of `p` in column `f`.
    pub fn kernel(&self) -> BitMatrix {
        let column_count = self.matrix.column_count();
        let free_columns = self.free_columns();
        let mut result = BitMatrix::zeros(free_columns.len(), column_count);
        for (row_position, free_column) in free_columns.iter().enumerate() {
            result.set((row_position, *free_column), true);
            for (pivot_row, pivot_column) in self.pivots.iter().enumerate() {
                if self.matrix.get((pivot_row, *free_column)) {
                    result.set((row_position, *pivot_column), true);
                }
            }
        }
        result
    }
}

impl From<BitMatrix> for EchelonForm {
    fn from(matrix: BitMatrix) -> Self {
        Self::new(matrix)
    }
}

/// Gauss-Jordan elimination over GF(2), in place.
///
/// Columns are scanned left to right; for each the first row at or below the
/// current pivot row with a one becomes the pivot row. The pivot row is then
/// added to every other row with a one in that column.
pub(super) fn echelonize(matrix: &mut BitMatrix) -> Vec<usize> {
    let mut pivot = pivot_of(matrix, (0, 0));
    let mut rank_profile = Vec::<usize>::with_capacity(matrix.column_count());

    for row_index in 0..matrix.row_count() {
        if pivot.1 >= matrix.column_count() {
            break;
        }
        matrix.swap_rows(pivot.0, row_index);
        pivot.0 = row_index;
        rank_profile.push(pivot.1);
        reduce(matrix, pivot);
        pivot = pivot_of(matrix, (pivot.0 + 1, pivot.1 + 1));
    }
    rank_profile
}

fn pivot_of(matrix: &BitMatrix, starting_at: (usize, usize)) -> (usize, usize) {
    let (mut row_index, mut column_index) = starting_at;
    if row_index >= matrix.row_count() || column_index >= matrix.column_count() {
        return (row_index, matrix.column_count());
    }
    while !matrix.get((row_index, column_index)) {
        row_index += 1;
        if row_index == matrix.row_count() {
            column_index += 1;
            row_index = starting_at.0;
            if column_index == matrix.column_count() {
                break;
            }
        }
    }
    (row_index, column_index)
}

fn reduce(matrix: &mut BitMatrix, from: (usize, usize)) {
    for row_index in 0..matrix.row_count() {
        if row_index != from.0 && matrix.get((row_index, from.1)) {
            matrix.add_into_row(row_index, from.0);
        }
    }
}

/// Indices in `0..index_bound` missing from the ascending slice `v`.
#[must_use]
pub fn complement(v: &[usize], index_bound: usize) -> Vec<usize> {
    debug_assert!(v.windows(2).all(|pair| pair[0] < pair[1]));
    let values = v.iter().copied().assume_sorted_by_item();
    (0..index_bound).assume_sorted_by_item().difference(values).collect()
}

#[test]
fn complement_test() {
    assert_eq!(complement(&[1, 2, 3, 6], 7), vec![0, 4, 5]);
    assert_eq!(complement(&[0, 1, 2, 3, 6], 8), vec![4, 5, 7]);
    assert_eq!(complement(&[], 3), vec![0, 1, 2]);
}

#[test]
fn pivot_skips_empty_columns() {
    let matrix: BitMatrix = "001|011".parse().unwrap();
    assert_eq!(pivot_of(&matrix, (0, 0)), (1, 1));
    assert_eq!(pivot_of(&matrix, (1, 2)), (1, 2));
}
