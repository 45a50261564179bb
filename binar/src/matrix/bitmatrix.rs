use crate::matrix::echelon::{self, EchelonForm};
use crate::{BitVec, Bitwise, BitwiseMut, BitwisePair};
use std::ops::{Add, BitXor, Index, Mul};
use std::str::FromStr;

/// A 2D matrix of bits for linear algebra over GF(2).
///
/// Rows are stored as [`BitVec`]s of equal length, so row operations (swaps,
/// additions) are cheap and a row can be borrowed directly.
///
/// # Construction
///
/// ```
/// use binar::BitMatrix;
///
/// let zeros = BitMatrix::zeros(10, 20);
/// let identity = BitMatrix::identity(10);
///
/// let rows = vec![
///     vec![true, false, true],
///     vec![false, true, false],
/// ];
/// let matrix = BitMatrix::from_iter(rows, 3);
/// assert_eq!(matrix.shape(), (2, 3));
/// ```
///
/// # Linear Algebra Operations
///
/// ```
/// use binar::BitMatrix;
///
/// let mut m = BitMatrix::identity(3);
/// m.set((0, 1), true);
/// m.set((1, 2), true);
///
/// assert_eq!(m.rank(), 3);
/// assert_eq!(m.kernel().row_count(), 0);
/// assert_eq!(m.transposed().transposed(), m);
/// ```
///
/// # See Also
///
/// - [`EchelonForm`] - Reduced row echelon form with pivots, kernel and span tests
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    column_count: usize,
    rows: Vec<BitVec>,
}

impl BitMatrix {
    /// Creates a matrix with the given shape (alias for [`zeros`](BitMatrix::zeros)).
    pub fn with_shape(rows: usize, columns: usize) -> Self {
        Self::zeros(rows, columns)
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            column_count: columns,
            rows: vec![BitVec::zeros(columns); rows],
        }
    }

    pub fn identity(dimension: usize) -> Self {
        let mut result = Self::zeros(dimension, dimension);
        for index in 0..dimension {
            result.set((index, index), true);
        }
        result
    }

    /// Creates a matrix from nested iterators of boolean values.
    ///
    /// # Panics
    ///
    /// Panics if a row is longer than `column_count`.
    pub fn from_iter<Row, Rows>(iter: Rows, column_count: usize) -> Self
    where
        Row: IntoIterator<Item = bool>,
        Rows: IntoIterator<Item = Row>,
    {
        let rows = iter
            .into_iter()
            .map(|row| {
                let mut bits: BitVec = row.into_iter().collect();
                assert!(bits.len() <= column_count, "row longer than {column_count} columns");
                bits.resize(column_count);
                bits
            })
            .collect();
        Self { column_count, rows }
    }

    /// Creates a matrix taking ownership of the given rows.
    ///
    /// # Panics
    ///
    /// Panics if a row length differs from `column_count`.
    pub fn from_rows(rows: Vec<BitVec>, column_count: usize) -> Self {
        for row in &rows {
            assert_eq!(row.len(), column_count, "row length must equal the column count");
        }
        Self { column_count, rows }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(Bitwise::is_zero)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn row(&self, index: usize) -> &BitVec {
        &self.rows[index]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut BitVec {
        &mut self.rows[index]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &BitVec> {
        self.rows.iter()
    }

    /// Returns a copy of the specified column.
    pub fn column(&self, index: usize) -> BitVec {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// # Panics
    ///
    /// Panics if the row length differs from the column count.
    pub fn push_row(&mut self, row: BitVec) {
        assert_eq!(row.len(), self.column_count, "row length must equal the column count");
        self.rows.push(row);
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, index: (usize, usize), to: bool) {
        self.rows[index.0].assign_index(index.1, to);
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: (usize, usize)) -> bool {
        self.rows[index.0][index.1]
    }

    pub fn swap_rows(&mut self, left_row_index: usize, right_row_index: usize) {
        self.rows.swap(left_row_index, right_row_index);
    }

    /// Adds (XORs) one row into another: `row[to_index] ^= row[from_index]`.
    ///
    /// # Example
    ///
    /// ```
    /// use binar::{BitMatrix, Bitwise};
    ///
    /// let mut m = BitMatrix::identity(3);
    /// m.add_into_row(0, 1);
    /// assert_eq!(m.row(0).weight(), 2);
    /// ```
    pub fn add_into_row(&mut self, to_index: usize, from_index: usize) {
        if to_index == from_index {
            self.rows[to_index].clear_bits();
            return;
        }
        let from = self.rows[from_index].clone();
        self.rows[to_index] ^= &from;
    }

    /// Reduces the matrix to reduced row echelon form in place and returns the
    /// pivot column indices.
    ///
    /// Rows may be permuted and combined; callers needing the original should
    /// use [`echelon_form`](BitMatrix::echelon_form) instead.
    ///
    /// ```
    /// use binar::BitMatrix;
    ///
    /// let mut m: BitMatrix = "101|010".parse().unwrap();
    /// let pivots = m.echelonize();
    /// assert_eq!(pivots, vec![0, 1]);
    /// ```
    pub fn echelonize(&mut self) -> Vec<usize> {
        echelon::echelonize(self)
    }

    /// Reduced row echelon form of a copy of this matrix.
    #[must_use]
    pub fn echelon_form(&self) -> EchelonForm {
        EchelonForm::new(self.clone())
    }

    /// Computes the rank of the matrix (dimension of the row/column space).
    #[must_use]
    pub fn rank(&self) -> usize {
        self.clone().echelonize().len()
    }

    /// Computes the kernel (null space) of this matrix.
    ///
    /// Returns a matrix whose rows form a basis for the kernel.
    ///
    /// ```
    /// use binar::BitMatrix;
    ///
    /// let m = BitMatrix::zeros(2, 3);
    /// assert_eq!(m.kernel().row_count(), 3);
    /// ```
    pub fn kernel(&self) -> BitMatrix {
        self.echelon_form().kernel()
    }

    pub fn transposed(&self) -> Self {
        let mut result = Self::zeros(self.column_count, self.row_count());
        for (row_index, row) in self.rows.iter().enumerate() {
            for column_index in row.support() {
                result.set((column_index, row_index), true);
            }
        }
        result
    }

    /// Multiplies a row vector by this matrix from the left: `left * self`.
    ///
    /// # Panics
    ///
    /// Panics if `left.len() != self.row_count()`.
    pub fn right_multiply(&self, left: &BitVec) -> BitVec {
        assert_eq!(left.len(), self.row_count());
        let mut result = BitVec::zeros(self.column_count);
        for row_index in left.support() {
            result ^= &self.rows[row_index];
        }
        result
    }
}

impl Index<(usize, usize)> for BitMatrix {
    type Output = bool;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl Add for &BitMatrix {
    type Output = BitMatrix;

    fn add(self, other: Self) -> Self::Output {
        assert_eq!(self.shape(), other.shape());
        let rows = self.rows.iter().zip(&other.rows).map(|(left, right)| left ^ right).collect();
        BitMatrix::from_rows(rows, self.column_count)
    }
}

impl BitXor for &BitMatrix {
    type Output = BitMatrix;

    fn bitxor(self, other: Self) -> Self::Output {
        self.add(other)
    }
}

impl Mul for &BitMatrix {
    type Output = BitMatrix;

    fn mul(self, other: Self) -> Self::Output {
        assert_eq!(self.column_count(), other.row_count());
        let rows = self.rows.iter().map(|row| other.right_multiply(row)).collect();
        BitMatrix::from_rows(rows, other.column_count())
    }
}

impl Mul<&BitVec> for &BitMatrix {
    type Output = BitVec;

    fn mul(self, right: &BitVec) -> Self::Output {
        assert_eq!(right.len(), self.column_count());
        self.rows.iter().map(|row| row.dot(right)).collect()
    }
}

impl std::fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "[")?;
        }
        for row in &self.rows {
            write!(f, "{row}")?;
            if f.alternate() {
                write!(f, "|")?;
            } else {
                writeln!(f)?;
            }
        }
        if f.alternate() {
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitMatrix(shape={:?},value={:#})", self.shape(), self)
    }
}

/// Parses rows separated by `|`, `;` or newlines, e.g. `"101|010"`.
/// The error is the index of the first malformed row.
impl FromStr for BitMatrix {
    type Err = usize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::<BitVec>::new();
        let mut column_count = 0;
        for (row_index, row_string) in s.split(['|', '[', ']', ';', '\n']).enumerate() {
            let row: BitVec = row_string.trim().parse().map_err(|_| row_index)?;
            if !row.is_empty() {
                column_count = column_count.max(row.len());
                rows.push(row);
            }
        }
        for row in &mut rows {
            row.resize(column_count);
        }
        Ok(BitMatrix::from_rows(rows, column_count))
    }
}

/// Stacks the rows of all matrices, top to bottom.
///
/// # Panics
///
/// Panics if column counts differ.
pub fn row_stacked<'t, Matrices>(matrices: Matrices) -> BitMatrix
where
    Matrices: IntoIterator<Item = &'t BitMatrix>,
{
    let mut result: Option<BitMatrix> = None;
    for matrix in matrices {
        match result.as_mut() {
            None => result = Some(matrix.clone()),
            Some(stacked) => {
                for row in matrix.rows() {
                    stacked.push_row(row.clone());
                }
            }
        }
    }
    result.unwrap_or_else(|| BitMatrix::zeros(0, 0))
}
