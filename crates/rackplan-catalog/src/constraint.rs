//! Constraint definitions and flag normalization

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The "not applicable" threshold sentinel used by raw constraint rows
pub const AMOUNT_UNSET: i64 = -1;

/// Where an aggregated value or constraint applies: the whole facility, or
/// one named section of it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Global,
    Section(String),
}

impl Scope {
    pub fn from_section(section: Option<&str>) -> Self {
        match section {
            Some(name) => Scope::Section(name.to_string()),
            None => Scope::Global,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Section(name) => write!(f, "{}", name),
        }
    }
}

/// The single active kind of a constraint row.
///
/// Thresholds pass inclusively: `Below(a)` accepts values up to and
/// including `a`, `Above(a)` accepts values down to and including `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Value must stay at or below the threshold
    Below { amount: i64 },
    /// Value must stay at or above the threshold
    Above { amount: i64 },
    /// Optimization hint: smaller is better, never a hard violation
    Minimize,
    /// Optimization hint: larger is better, never a hard violation
    Maximize,
    /// Tracked but never evaluated
    Unconstrained,
}

/// A constraint row as authored in a TOML file, using the legacy five-flag
/// encoding. `section` omitted means the row is facility-global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConstraint {
    #[serde(default)]
    pub section: Option<String>,
    pub unit: String,
    #[serde(default = "amount_unset")]
    pub amount: i64,
    #[serde(default)]
    pub below: bool,
    #[serde(default)]
    pub above: bool,
    #[serde(default)]
    pub minimize: bool,
    #[serde(default)]
    pub maximize: bool,
    #[serde(default)]
    pub unconstrained: bool,
}

fn amount_unset() -> i64 {
    AMOUNT_UNSET
}

/// TOML file format for constraint definitions
#[derive(Debug, Deserialize)]
pub struct ConstraintFile {
    pub constraint: Vec<RawConstraint>,
}

/// A normalized constraint: one scope, one unit, exactly one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDef {
    pub scope: Scope,
    pub unit: String,
    pub kind: ConstraintKind,
}

impl RawConstraint {
    /// Collapse the five-flag encoding into a single kind.
    ///
    /// Precedence when more than one flag is set (diagnostic recorded):
    /// below > above > minimize > maximize > unconstrained. A threshold flag
    /// with the -1 sentinel degrades to `Unconstrained` so the sentinel is
    /// never compared against a real total.
    pub fn normalize(&self, diagnostics: &mut Vec<Diagnostic>) -> ConstraintDef {
        let scope = Scope::from_section(self.section.as_deref());

        let set = [
            self.below,
            self.above,
            self.minimize,
            self.maximize,
            self.unconstrained,
        ]
        .iter()
        .filter(|f| **f)
        .count();

        if set > 1 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::AmbiguousConstraint,
                format!(
                    "constraint on '{}' in {} has {} kind flags set; first wins",
                    self.unit, scope, set
                ),
            ));
        }

        let kind = if self.below {
            self.threshold_kind(&scope, diagnostics, |amount| ConstraintKind::Below { amount })
        } else if self.above {
            self.threshold_kind(&scope, diagnostics, |amount| ConstraintKind::Above { amount })
        } else if self.minimize {
            ConstraintKind::Minimize
        } else if self.maximize {
            ConstraintKind::Maximize
        } else {
            ConstraintKind::Unconstrained
        };

        ConstraintDef {
            scope,
            unit: self.unit.clone(),
            kind,
        }
    }

    fn threshold_kind(
        &self,
        scope: &Scope,
        diagnostics: &mut Vec<Diagnostic>,
        make: impl FnOnce(i64) -> ConstraintKind,
    ) -> ConstraintKind {
        if self.amount == AMOUNT_UNSET {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MissingThreshold,
                format!(
                    "threshold constraint on '{}' in {} has no amount; treating as unconstrained",
                    self.unit, scope
                ),
            ));
            ConstraintKind::Unconstrained
        } else {
            make(self.amount)
        }
    }
}
