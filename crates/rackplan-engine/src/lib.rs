//! Rackplan Engine - Aggregation, constraint evaluation, and coordination
//!
//! The computational heart of rackplan: rebuilds per-section and global
//! resource totals from the catalog and the placement ledger, classifies
//! them against the constraint set, and arbitrates which of the two editing
//! surfaces may currently mutate the layout.

mod coordinator;
mod evaluator;
mod report;
mod session;
mod totals;

pub use coordinator::{Surface, SurfaceCoordinator, SurfaceSnapshot};
pub use evaluator::evaluate;
pub use report::{HintDirection, OptimizationHint, ValidationReport, Violation};
pub use session::DesignSession;
pub use totals::{aggregate, Totals};
