//! Degraded-mode diagnostics
//!
//! Malformed catalog rows and dangling references never abort a computation
//! pass; they degrade to zero/skip and surface here, distinct from genuine
//! constraint violations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of data problem was tolerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// An effect row had both the input and output flag set
    AmbiguousEffect,
    /// A constraint row had more than one kind flag set
    AmbiguousConstraint,
    /// A threshold constraint carried the -1 "not applicable" sentinel
    MissingThreshold,
    /// A placement referenced a module absent from the catalog
    UnknownModule,
}

/// A single degraded-mode warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
