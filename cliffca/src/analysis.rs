//! The full analysis of a rule and a lattice state as one stateless call.
//! Callers wanting memoization key it on the inputs.

use crate::distance::{code_distance, exhaustive_distance, logical_qubits_of, CodeDistance};
use crate::logical::{compute_entanglement, find_logical_operators, LogicalOperators};
use crate::properties::{determinant_of, has_orthogonal_stabilizer_periodic};
use crate::tableau::translated_tableau;
use crate::{AnalysisOptions, LatticeState, Result, RuleMatrix, StabilizerGenerator};
use laurent::{GF2, LaurentMatrix, LaurentPolynomial};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleReport {
    pub rule: RuleMatrix,
    pub invertible: bool,
    pub determinant: LaurentPolynomial,
    pub symplectic: bool,
    /// `M(x⁻¹)ᵗ Ω M(x)`.
    pub symplectic_image: LaurentMatrix,
}

impl RuleReport {
    #[must_use]
    pub fn determinant_diagnostic(&self) -> String {
        format!("det(M(x)) = {}", self.determinant)
    }

    #[must_use]
    pub fn symplectic_diagnostic(&self) -> String {
        let relation = if self.symplectic { "=" } else { "≠" };
        format!("M(x⁻¹)ᵗΩM(x) = {} {relation} Ω", self.symplectic_image)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StabilizerReport {
    pub state: LatticeState,
    pub lattice_size: usize,
    pub generator: StabilizerGenerator,
    /// Commutes with its translates on the infinite chain.
    pub orthogonal: bool,
    /// Commutes with its translates on the periodic chain.
    pub orthogonal_periodic: bool,
    pub logical_qubits: usize,
    pub distance: CodeDistance,
    pub logical_operators: Option<LogicalOperators>,
    pub entanglement: usize,
    pub exhaustive_distance: Option<usize>,
    /// Whether the brute-force tableau distance matches the reported
    /// distance; `None` when the brute force did not run.
    pub exhaustive_agrees: Option<bool>,
}

impl StabilizerReport {
    #[must_use]
    pub fn generator_diagnostic(&self) -> String {
        format!("X(z) = {}, Z(z) = {}", self.generator.x, self.generator.z)
    }

    #[must_use]
    pub fn code_distance(&self) -> usize {
        self.distance.value()
    }

    #[must_use]
    pub fn distance_diagnostic(&self) -> String {
        let reported = format!("d = {} ({})", self.distance.value(), self.distance.method());
        match self.exhaustive_distance {
            Some(exhaustive) if exhaustive == self.distance.value() => format!("{reported}, brute force agrees"),
            Some(exhaustive) => format!("{reported}, brute force d = {exhaustive}"),
            None => reported,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    pub rule: RuleReport,
    pub stabilizer: StabilizerReport,
}

/// Invertibility and symplecticity of the transfer matrix over GF(2).
#[tracing::instrument(skip_all, fields(rule = %rule))]
pub fn analyze_rule(rule: &RuleMatrix) -> RuleReport {
    let transfer = rule.to_laurent(GF2);
    let determinant = determinant_of(rule);
    let symplectic_image = transfer.symplectic_image();
    let report = RuleReport {
        rule: rule.clone(),
        invertible: determinant.is_monomial(),
        symplectic: symplectic_image == LaurentMatrix::symplectic_form(GF2),
        determinant,
        symplectic_image,
    };
    tracing::debug!(invertible = report.invertible, symplectic = report.symplectic, "rule_analyzed");
    report
}

/// Code parameters of the translates of the generator of `state` on a periodic
/// chain of `n` sites.
///
/// `k` and the distance are always computed. The tableau stage runs only when
/// the generator commutes with its periodic translates and `k > 0`.
///
/// # Errors
///
/// Returns an error unless `state` has exactly `n > 0` sites.
#[tracing::instrument(skip_all, fields(state = %state, n = n))]
pub fn analyze_stabilizer(state: &LatticeState, n: usize, options: &AnalysisOptions) -> Result<StabilizerReport> {
    state.check_size(n)?;
    let generator = StabilizerGenerator::from_state(state);
    let orthogonal = generator.symplectic_self_product().is_zero();
    let orthogonal_periodic = has_orthogonal_stabilizer_periodic(state, n)?;
    let logical_qubits = logical_qubits_of(&generator, n);
    let distance = code_distance(state, n, options.cross_check_distance)?;

    let mut report = StabilizerReport {
        state: state.clone(),
        lattice_size: n,
        generator,
        orthogonal,
        orthogonal_periodic,
        logical_qubits,
        distance,
        logical_operators: None,
        entanglement: 0,
        exhaustive_distance: None,
        exhaustive_agrees: None,
    };
    if orthogonal_periodic && logical_qubits > 0 && options.logical_operators {
        let tableau = translated_tableau(&report.generator, n);
        let logicals = find_logical_operators(&tableau, logical_qubits);
        report.entanglement = compute_entanglement(&tableau, &logicals, options.entanglement_includes_z_logicals);
        report.exhaustive_distance = options
            .exhaustive_distance_limit
            .and_then(|limit| exhaustive_distance(&tableau, &logicals, limit));
        report.logical_operators = Some(logicals);
        report.exhaustive_agrees = report
            .exhaustive_distance
            .map(|exhaustive| exhaustive == report.distance.value());
    }
    if let (Some(false), Some(exhaustive)) = (report.exhaustive_agrees, report.exhaustive_distance) {
        tracing::warn!(
            reported = report.distance.value(),
            method = %report.distance.method(),
            exhaustive,
            "exhaustive_distance_disagrees"
        );
    }
    tracing::debug!(
        orthogonal_periodic,
        k = report.logical_qubits,
        d = report.distance.value(),
        entanglement = report.entanglement,
        "stabilizer_analyzed"
    );
    Ok(report)
}

/// [`analyze_rule`] and [`analyze_stabilizer`] together.
///
/// # Errors
///
/// Returns an error unless `state` has exactly `n > 0` sites.
#[tracing::instrument(skip_all, fields(rule = %rule, n = n))]
pub fn analyze(rule: &RuleMatrix, state: &LatticeState, n: usize, options: &AnalysisOptions) -> Result<Analysis> {
    Ok(Analysis {
        rule: analyze_rule(rule),
        stabilizer: analyze_stabilizer(state, n, options)?,
    })
}
