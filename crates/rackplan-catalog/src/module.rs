//! Module definitions and effect normalization

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use serde::{Deserialize, Serialize};

/// An effect row as authored in a module TOML file.
///
/// `amount` is a non-negative magnitude; the sign is carried by the
/// `input`/`output` flags and resolved once at ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEffect {
    pub unit: String,
    pub amount: i64,
    #[serde(default)]
    pub input: bool,
    #[serde(default)]
    pub output: bool,
}

/// A module as authored in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawModuleDef {
    pub name: String,
    #[serde(default)]
    pub effect: Vec<RawEffect>,
}

/// TOML file format for module definitions
#[derive(Debug, Deserialize)]
pub struct ModuleFile {
    pub module: Vec<RawModuleDef>,
}

/// A normalized resource effect: the signed per-placement contribution to
/// one unit's total. Output rows add, input rows subtract, flagless rows on
/// ordinary units are purely descriptive and contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEffect {
    pub unit: String,
    pub delta: i64,
}

/// An immutable module template with normalized effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDef {
    pub name: String,
    pub effects: Vec<ResourceEffect>,
}

impl RawModuleDef {
    /// Normalize the raw flag encoding into signed deltas.
    ///
    /// Footprint units always accumulate as positive consumption regardless
    /// of the flags. A row with both flags set is ambiguous; output wins and
    /// a diagnostic is recorded.
    pub fn normalize(
        &self,
        footprint_units: &[&str],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ModuleDef {
        let mut effects = Vec::with_capacity(self.effect.len());

        for raw in &self.effect {
            if raw.input && raw.output {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::AmbiguousEffect,
                    format!(
                        "module '{}' effect '{}' has both input and output set; treating as output",
                        self.name, raw.unit
                    ),
                ));
            }

            let delta = if footprint_units.contains(&raw.unit.as_str()) {
                raw.amount
            } else if raw.output {
                raw.amount
            } else if raw.input {
                -raw.amount
            } else {
                0
            };

            effects.push(ResourceEffect {
                unit: raw.unit.clone(),
                delta,
            });
        }

        ModuleDef {
            name: self.name.clone(),
            effects,
        }
    }
}
