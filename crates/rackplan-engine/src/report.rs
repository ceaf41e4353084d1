//! Validation report types

use rackplan_catalog::{ConstraintKind, Diagnostic, Scope};
use serde::Serialize;

/// A detected mismatch between an aggregated value and its constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub scope: Scope,
    pub unit: String,
    pub kind: ConstraintKind,
    pub required: i64,
    pub actual: i64,
    pub message: String,
}

/// Direction of an optimization hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintDirection {
    Minimize,
    Maximize,
}

/// A directional scoring hint for an optional ranking layer.
///
/// Minimize/Maximize constraints never fail on their own; they only report
/// the current value and the preferred direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationHint {
    pub scope: Scope,
    pub unit: String,
    pub direction: HintDirection,
    pub current: i64,
}

/// A complete evaluation pass: violations grouped by scope then unit,
/// optimization hints, and the degraded-mode diagnostics that accumulated
/// along the way. Diagnostics are never violations — a malformed catalog
/// row must not masquerade as a genuine constraint failure.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub hints: Vec<OptimizationHint>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the design satisfies every hard constraint
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        if self.violations.is_empty() && self.diagnostics.is_empty() {
            return "All constraints passed.".to_string();
        }

        format!(
            "{} violation(s), {} diagnostic(s)",
            self.violations.len(),
            self.diagnostics.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert_eq!(report.summary(), "All constraints passed.");
    }

    #[test]
    fn test_diagnostics_do_not_invalidate() {
        let mut report = ValidationReport::new();
        report.diagnostics.push(Diagnostic::new(
            rackplan_catalog::DiagnosticKind::UnknownModule,
            "placement 9 references unknown module 'Ghost'",
        ));

        assert!(report.is_valid());
        assert_eq!(report.summary(), "0 violation(s), 1 diagnostic(s)");
    }
}
