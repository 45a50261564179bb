use binar::matrix::row_stacked;
use binar::{BitMatrix, BitVec, Bitwise, EchelonForm};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn shape(row_count in 0..40usize, column_count in 0..40usize) {
        let matrix = BitMatrix::with_shape(row_count, column_count);
        assert_eq!(matrix.shape(), (row_count, column_count));
        assert!(matrix.is_zero());
    }

    #[test]
    fn swap_rows(matrix in nonempty_bitmatrix(30), raw_row_indexes in (0..30usize, 0..30usize)) {
        let row_indexes = [raw_row_indexes.0 % matrix.row_count(), raw_row_indexes.1 % matrix.row_count()];
        let mut swapped = matrix.clone();
        swapped.swap_rows(row_indexes[0], row_indexes[1]);
        assert_eq!(matrix.row(row_indexes[0]), swapped.row(row_indexes[1]));
        for row_index in (0..matrix.row_count()).collect::<HashSet<usize>>().difference(&HashSet::from(row_indexes)) {
            assert_eq!(matrix.row(*row_index), swapped.row(*row_index));
        }
    }

    #[test]
    fn addition((left, right) in equal_shape_bitmatrices(30)) {
        let sum = &left + &right;
        for irow in 0..left.row_count() {
            for icol in 0..left.column_count() {
                let index = (irow, icol);
                assert_eq!(sum[index], left[index] ^ right[index]);
            }
        }
        assert_eq!(sum, &right ^ &left);
    }

    #[test]
    fn transpose_involution(matrix in arbitrary_bitmatrix(30)) {
        let transposed = matrix.transposed();
        assert_eq!(transposed.shape(), (matrix.column_count(), matrix.row_count()));
        assert_eq!(transposed.transposed(), matrix);
    }

    #[test]
    fn echelonize_is_reduced(matrix in arbitrary_bitmatrix(30)) {
        let mut reduced = matrix.clone();
        let pivots = reduced.echelonize();
        for (row_index, pivot) in pivots.iter().enumerate() {
            assert_eq!(reduced.row(row_index).min_support(), Some(*pivot));
            assert!(reduced.column(*pivot).is_unit(row_index));
        }
        for row_index in pivots.len()..reduced.row_count() {
            assert!(reduced.row(row_index).is_zero());
        }
        assert!(pivots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn echelonize_is_idempotent(matrix in arbitrary_bitmatrix(30)) {
        let mut once = matrix.clone();
        let first_pivots = once.echelonize();
        let mut twice = once.clone();
        let second_pivots = twice.echelonize();
        assert_eq!(once, twice);
        assert_eq!(first_pivots, second_pivots);
    }

    #[test]
    fn row_space_is_preserved(matrix in arbitrary_bitmatrix(20)) {
        let echelon = matrix.echelon_form();
        for row in matrix.rows() {
            assert!(echelon.spans(row));
        }
        assert_eq!(echelon.rank(), matrix.transposed().rank());
    }

    #[test]
    fn kernel_annihilates(matrix in arbitrary_bitmatrix(30)) {
        let kernel = matrix.kernel();
        assert_eq!(kernel.row_count() + matrix.rank(), matrix.column_count());
        for vector in kernel.rows() {
            assert!((&matrix * vector).is_zero());
        }
        assert_eq!(kernel.rank(), kernel.row_count());
    }

    #[test]
    fn multiplication_matches_right_multiply((left, right) in multipliable_bitmatrices(20)) {
        let product = &left * &right;
        for row_index in 0..left.row_count() {
            assert_eq!(product.row(row_index), &right.right_multiply(left.row(row_index)));
        }
    }

    #[test]
    fn display_parse(matrix in nonempty_bitmatrix(20)) {
        let parsed: BitMatrix = format!("{matrix:#}").parse().unwrap();
        assert_eq!(parsed, matrix);
    }
}

#[test]
fn first_eligible_row_is_pivot() {
    let matrix: BitMatrix = "011|110|100".parse().unwrap();
    let echelon = EchelonForm::new(matrix);
    assert_eq!(echelon.pivots(), &[0, 1, 2]);
    assert_eq!(echelon.matrix(), &BitMatrix::identity(3));
}

#[test]
fn kernel_of_dependent_rows() {
    let matrix: BitMatrix = "1100|0110|1010".parse().unwrap();
    let echelon = EchelonForm::new(matrix.clone());
    assert_eq!(echelon.pivots(), &[0, 1]);
    assert_eq!(echelon.free_columns(), vec![2, 3]);
    let kernel = echelon.kernel();
    assert_eq!(kernel.row(0), &"1110".parse::<BitVec>().unwrap());
    assert_eq!(kernel.row(1), &"0001".parse::<BitVec>().unwrap());
}

#[test]
fn stacking() {
    let top = BitMatrix::identity(2);
    let bottom: BitMatrix = "11".parse().unwrap();
    let stacked = row_stacked([&top, &bottom]);
    assert_eq!(stacked.shape(), (3, 2));
    assert_eq!(stacked.rank(), 2);
}

fn arbitrary_bitmatrix(max_dimension: usize) -> impl Strategy<Value = BitMatrix> {
    (0..max_dimension, 0..max_dimension).prop_flat_map(|(row_count, column_count)| fixed_size_bitmatrix(row_count, column_count))
}

fn nonempty_bitmatrix(max_dimension: usize) -> impl Strategy<Value = BitMatrix> {
    (1..max_dimension, 1..max_dimension).prop_flat_map(|(row_count, column_count)| fixed_size_bitmatrix(row_count, column_count))
}

fn equal_shape_bitmatrices(max_dimension: usize) -> impl Strategy<Value = (BitMatrix, BitMatrix)> {
    (0..max_dimension, 0..max_dimension).prop_flat_map(|(row_count, column_count)| {
        (fixed_size_bitmatrix(row_count, column_count), fixed_size_bitmatrix(row_count, column_count))
    })
}

fn multipliable_bitmatrices(max_dimension: usize) -> impl Strategy<Value = (BitMatrix, BitMatrix)> {
    (0..max_dimension, 0..max_dimension, 0..max_dimension).prop_flat_map(|(rows, inner, columns)| {
        (fixed_size_bitmatrix(rows, inner), fixed_size_bitmatrix(inner, columns))
    })
}

fn fixed_size_bitmatrix(row_count: usize, column_count: usize) -> impl Strategy<Value = BitMatrix> {
    prop::collection::vec(prop::collection::vec(any::<bool>(), column_count), row_count)
        .prop_map(move |rows| BitMatrix::from_iter(rows, column_count))
}
