use laurent::LaurentError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("rule matrix must be 2×6, got {rows}×{columns}")]
    RuleShape { rows: usize, columns: usize },
    #[error("cannot parse row {row} of the rule matrix")]
    RuleParse { row: usize },
    #[error("lattice state has {actual} sites but the lattice size is {expected}")]
    StateLength { expected: usize, actual: usize },
    #[error("lattice size must be positive")]
    EmptyLattice,
    #[error("unknown Pauli symbol `{symbol}` at position {position}")]
    UnknownPauli { symbol: char, position: usize },
    #[error(transparent)]
    Laurent(#[from] LaurentError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
