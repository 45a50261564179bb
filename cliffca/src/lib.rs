mod analysis;
mod error;
mod options;
mod rule;
mod state;

pub mod distance;
pub mod logical;
pub mod properties;
pub mod tableau;

#[cfg(feature = "serde")]
mod serde;

pub use analysis::{analyze, analyze_rule, analyze_stabilizer, Analysis, RuleReport, StabilizerReport};
pub use distance::{calculate_code_distance, calculate_logical_qubits, CodeDistance, DistanceMethod};
pub use error::{AnalysisError, Result};
pub use logical::{compute_entanglement, find_logical_operators, LogicalOperators, LogicalPair};
pub use options::{AnalysisOptions, DEFAULT_EXHAUSTIVE_DISTANCE_LIMIT};
pub use rule::{Neighbor, RuleMatrix, RULE_COLUMNS, RULE_ROWS};
pub use state::{LatticeState, PauliSymbol, StabilizerGenerator};
