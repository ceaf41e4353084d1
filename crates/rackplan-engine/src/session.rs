//! Design session facade
//!
//! Ties one catalog, one placement ledger, one boundary, and the surface
//! coordinator together behind the interface the surrounding infrastructure
//! (HTTP layer, VR bridge, CLI) consumes.

use crate::coordinator::{Surface, SurfaceCoordinator, SurfaceSnapshot};
use crate::evaluator::evaluate;
use crate::report::ValidationReport;
use crate::totals::{aggregate, Totals};
use rackplan_catalog::{CatalogRegistry, Diagnostic};
use rackplan_core::{Point, PlacementId, RackError, Result};
use rackplan_layout::{BoundaryPolygon, PlacementLedger};
use tracing::info;

/// An editing session over one design.
///
/// Aggregation and evaluation are synchronous, single-pass, and idempotent;
/// both are safe to re-run after every mutation, and callers are expected to
/// do exactly that rather than assume staleness-freedom across mutations.
pub struct DesignSession {
    catalog: CatalogRegistry,
    ledger: PlacementLedger,
    boundary: BoundaryPolygon,
    coordinator: SurfaceCoordinator,
}

impl DesignSession {
    /// Start an empty session over a catalog
    pub fn new(catalog: CatalogRegistry) -> Self {
        Self {
            catalog,
            ledger: PlacementLedger::new(),
            boundary: BoundaryPolygon::new(),
            coordinator: SurfaceCoordinator::new(),
        }
    }

    /// Resume a session from previously loaded state
    pub fn from_parts(
        catalog: CatalogRegistry,
        ledger: PlacementLedger,
        boundary: BoundaryPolygon,
        surface: Surface,
    ) -> Self {
        Self {
            catalog,
            ledger,
            boundary,
            coordinator: SurfaceCoordinator::with_surface(surface),
        }
    }

    /// Recompute all totals from the current ledger snapshot
    pub fn compute_totals(&self) -> (Totals, Vec<Diagnostic>) {
        aggregate(&self.catalog, &self.ledger)
    }

    /// Recompute totals and evaluate every constraint.
    ///
    /// Catalog-load diagnostics are folded in so a malformed row is always
    /// visible next to the violations it might otherwise distort.
    pub fn validate(&self) -> ValidationReport {
        let (totals, mut diagnostics) = self.compute_totals();
        let mut all = self.catalog.diagnostics().to_vec();
        all.append(&mut diagnostics);

        let report = evaluate(&self.catalog, &totals, &self.boundary.bounding_box(), all);
        info!(
            violations = report.violations.len(),
            diagnostics = report.diagnostics.len(),
            "validated design"
        );
        report
    }

    /// Place a module instance. The module must exist in the catalog; the
    /// section is free-form (a section without constraints simply
    /// accumulates into a scope the evaluator never queries).
    pub fn place(
        &mut self,
        module: &str,
        section: Option<&str>,
        x: i64,
        y: i64,
    ) -> Result<PlacementId> {
        if self.catalog.get_module(module).is_none() {
            return Err(RackError::ModuleNotFound(module.to_string()));
        }

        Ok(self
            .ledger
            .insert(module, section.map(|s| s.to_string()), x, y))
    }

    /// Move a placement to a new position
    pub fn move_placement(&mut self, id: PlacementId, x: i64, y: i64) -> Result<()> {
        self.ledger.move_to(id, x, y)
    }

    /// Remove a placement
    pub fn remove_placement(&mut self, id: PlacementId) -> Result<()> {
        self.ledger.remove(id)?;
        Ok(())
    }

    /// Replace the room boundary wholesale (the VR bulk commit)
    pub fn replace_boundary(&mut self, points: Vec<Point>) {
        self.boundary.replace(points);
    }

    /// The currently authoritative editing surface
    pub fn surface(&self) -> Surface {
        self.coordinator.current()
    }

    /// Read surface and version together (for pollers)
    pub fn surface_snapshot(&self) -> SurfaceSnapshot {
        self.coordinator.snapshot()
    }

    /// Hand control to the other surface
    pub fn toggle_surface(&self) -> SurfaceSnapshot {
        let snapshot = self.coordinator.toggle();
        info!(surface = %snapshot.surface, version = snapshot.version, "toggled surface");
        snapshot
    }

    pub fn catalog(&self) -> &CatalogRegistry {
        &self.catalog
    }

    pub fn ledger(&self) -> &PlacementLedger {
        &self.ledger
    }

    pub fn boundary(&self) -> &BoundaryPolygon {
        &self.boundary
    }
}
