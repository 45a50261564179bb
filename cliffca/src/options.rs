pub const DEFAULT_EXHAUSTIVE_DISTANCE_LIMIT: usize = 16;

/// Switches for the optional stages of [`analyze`](crate::analyze).
///
/// Deserialization fills missing fields from [`Default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct AnalysisOptions {
    /// Also compute the support-based distance and compare it with the residual scan.
    pub cross_check_distance: bool,
    /// Build the translated tableau, its logical operators and entanglement.
    pub logical_operators: bool,
    /// Count Z-only logical operators in the entanglement cut.
    pub entanglement_includes_z_logicals: bool,
    /// Largest generator count for the brute-force tableau distance; `None`
    /// skips it.
    pub exhaustive_distance_limit: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            cross_check_distance: true,
            logical_operators: true,
            entanglement_includes_z_logicals: false,
            exhaustive_distance_limit: Some(DEFAULT_EXHAUSTIVE_DISTANCE_LIMIT),
        }
    }
}

impl AnalysisOptions {
    /// Only `k` and the reported distance.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            cross_check_distance: false,
            logical_operators: false,
            entanglement_includes_z_logicals: false,
            exhaustive_distance_limit: None,
        }
    }
}
