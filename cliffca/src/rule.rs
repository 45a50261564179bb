use crate::{AnalysisError, Result};
use binar::{BitMatrix, BitVec};
use laurent::LaurentMatrix;
use std::str::FromStr;

pub const RULE_ROWS: usize = 2;
pub const RULE_COLUMNS: usize = 6;

/// Position of a 2×2 block inside a [`RuleMatrix`], and the power of `x` it
/// contributes to the transfer matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbor {
    Left,
    Center,
    Right,
}

impl Neighbor {
    pub const ALL: [Neighbor; 3] = [Neighbor::Left, Neighbor::Center, Neighbor::Right];

    #[must_use]
    pub fn exponent(self) -> i64 {
        match self {
            Neighbor::Left => -1,
            Neighbor::Center => 0,
            Neighbor::Right => 1,
        }
    }

    fn first_column(self) -> usize {
        match self {
            Neighbor::Left => 0,
            Neighbor::Center => 2,
            Neighbor::Right => 4,
        }
    }
}

/// The update rule of a Clifford cellular automaton: a 2×6 binary matrix
/// `[A_left | A_center | A_right]`.
///
/// Row `i` gives the new value of bit `i` of a site's `(x, z)` pair as a
/// combination of the bits of its left neighbor, itself and its right
/// neighbor.
///
/// ```
/// use cliffca::RuleMatrix;
///
/// let rule: RuleMatrix = "000100;011001".parse().unwrap();
/// assert_eq!(rule, RuleMatrix::glider());
/// assert_eq!(rule.to_laurent(2).to_string(), "[[0, 1], [1, x^-1 + x]]");
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RuleMatrix {
    matrix: BitMatrix,
}

impl RuleMatrix {
    /// # Errors
    ///
    /// Returns [`AnalysisError::RuleShape`] unless the matrix is 2×6.
    pub fn new(matrix: BitMatrix) -> Result<Self> {
        match matrix.shape() {
            (RULE_ROWS, RULE_COLUMNS) => Ok(Self { matrix }),
            (rows, columns) => Err(AnalysisError::RuleShape { rows, columns }),
        }
    }

    pub fn from_rows(rows: [[bool; RULE_COLUMNS]; RULE_ROWS]) -> Self {
        Self {
            matrix: BitMatrix::from_iter(rows, RULE_COLUMNS),
        }
    }

    /// `A_center = I`, no neighbor coupling.
    pub fn identity() -> Self {
        Self::from_rows([
            [false, false, true, false, false, false],
            [false, false, false, true, false, false],
        ])
    }

    /// The glider rule, `M(x) = [[0, 1], [1, x⁻¹ + x]]`.
    pub fn glider() -> Self {
        Self::from_rows([
            [false, false, false, true, false, false],
            [false, true, true, false, false, true],
        ])
    }

    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    pub fn row(&self, index: usize) -> &BitVec {
        self.matrix.row(index)
    }

    /// The 2×2 sub-block of the given neighbor.
    pub fn block(&self, neighbor: Neighbor) -> BitMatrix {
        let first = neighbor.first_column();
        let rows = self.matrix.rows().map(|row| row.extract(first, 2));
        BitMatrix::from_rows(rows.collect(), 2)
    }

    /// `M(x) = A_left·x⁻¹ + A_center + A_right·x` with coefficients modulo `modulus`.
    pub fn to_laurent(&self, modulus: u32) -> LaurentMatrix {
        LaurentMatrix::from_blocks(
            &self.block(Neighbor::Left),
            &self.block(Neighbor::Center),
            &self.block(Neighbor::Right),
            modulus,
        )
    }
}

impl TryFrom<BitMatrix> for RuleMatrix {
    type Error = AnalysisError;

    fn try_from(matrix: BitMatrix) -> Result<Self> {
        Self::new(matrix)
    }
}

impl From<RuleMatrix> for BitMatrix {
    fn from(rule: RuleMatrix) -> Self {
        rule.matrix
    }
}

/// Parses two rows of six binary digits separated by `;`, `|` or a newline.
/// Rows of the wrong length are rejected, never padded.
impl FromStr for RuleMatrix {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split([';', '|', '\n'])
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .enumerate()
            .map(|(row, text)| text.parse::<BitVec>().map_err(|_| AnalysisError::RuleParse { row }))
            .collect::<Result<Vec<_>>>()?;
        if let Some(short) = rows.iter().find(|row| row.len() != RULE_COLUMNS) {
            return Err(AnalysisError::RuleShape {
                rows: rows.len(),
                columns: short.len(),
            });
        }
        Self::new(BitMatrix::from_rows(rows, RULE_COLUMNS))
    }
}

impl std::fmt::Display for RuleMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.row(0), self.row(1))
    }
}
