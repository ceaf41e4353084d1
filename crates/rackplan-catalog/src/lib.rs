//! Rackplan Catalog - Module and constraint definitions
//!
//! This crate holds the read-only, per-design snapshot of module definitions
//! (typed, signed resource effects) and section constraint definitions. Raw
//! TOML rows use the legacy flag-based encoding; ingestion normalizes them
//! into signed deltas and a single tagged constraint kind, collecting
//! diagnostics for malformed rows instead of failing the load.

mod constraint;
mod diagnostics;
mod module;
mod registry;

pub use constraint::{ConstraintDef, ConstraintFile, ConstraintKind, RawConstraint, Scope};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use module::{ModuleDef, ModuleFile, RawEffect, RawModuleDef, ResourceEffect};
pub use registry::{CatalogRegistry, FootprintUnits};
