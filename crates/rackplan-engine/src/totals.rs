//! Resource aggregation

use rackplan_catalog::{CatalogRegistry, Diagnostic, DiagnosticKind, Scope};
use rackplan_layout::PlacementLedger;
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregated resource totals, per scope and unit.
///
/// Entirely derived state: discarded and rebuilt wholesale on every pass,
/// never patched incrementally. BTreeMaps keep output grouped by scope then
/// unit for stable, diffable reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Totals {
    values: BTreeMap<Scope, BTreeMap<String, i64>>,
}

impl Totals {
    /// Create an empty totals table
    pub fn new() -> Self {
        Self::default()
    }

    /// The net value for a unit in a scope. Unmapped scopes and units read
    /// as zero, not as an error.
    pub fn get(&self, scope: &Scope, unit: &str) -> i64 {
        self.values
            .get(scope)
            .and_then(|units| units.get(unit))
            .copied()
            .unwrap_or(0)
    }

    /// Ensure a (scope, unit) entry exists, at zero
    pub fn ensure(&mut self, scope: Scope, unit: impl Into<String>) {
        self.values.entry(scope).or_default().entry(unit.into()).or_insert(0);
    }

    /// Add a delta to a (scope, unit) entry
    pub fn add(&mut self, scope: Scope, unit: impl Into<String>, delta: i64) {
        *self
            .values
            .entry(scope)
            .or_default()
            .entry(unit.into())
            .or_insert(0) += delta;
    }

    /// Iterate scopes in order (global first, then sections by name)
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.values.keys()
    }

    /// Iterate (unit, value) pairs of one scope in unit order
    pub fn units(&self, scope: &Scope) -> impl Iterator<Item = (&str, i64)> {
        self.values
            .get(scope)
            .into_iter()
            .flat_map(|units| units.iter().map(|(unit, value)| (unit.as_str(), *value)))
    }
}

/// Rebuild all totals from the catalog and the current placement set.
///
/// Every (scope, unit) pair named by the constraint set starts at zero, so
/// empty sections are still visible to the evaluator. Each placement then
/// contributes its module's signed deltas to the global scope and, when the
/// placement is sectioned, to that section's scope as well — a module spends
/// against its section's budget and the facility-wide budget simultaneously.
///
/// Summation is commutative integer addition, so placement order never
/// affects the result. A placement referencing an unknown module is skipped
/// with a diagnostic rather than aborting the pass.
pub fn aggregate(catalog: &CatalogRegistry, ledger: &PlacementLedger) -> (Totals, Vec<Diagnostic>) {
    let mut totals = Totals::new();
    let mut diagnostics = Vec::new();

    for def in catalog.constraints() {
        totals.ensure(def.scope.clone(), def.unit.clone());
        totals.ensure(Scope::Global, def.unit.clone());
    }

    for placement in ledger.iter() {
        let module = match catalog.get_module(&placement.module) {
            Some(module) => module,
            None => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnknownModule,
                    format!(
                        "placement {} references unknown module '{}'",
                        placement.id, placement.module
                    ),
                ));
                continue;
            }
        };

        for effect in &module.effects {
            totals.add(Scope::Global, effect.unit.clone(), effect.delta);
            if let Some(section) = &placement.section {
                totals.add(
                    Scope::Section(section.clone()),
                    effect.unit.clone(),
                    effect.delta,
                );
            }
        }
    }

    debug!(
        placements = ledger.len(),
        scopes = totals.values.len(),
        skipped = diagnostics.len(),
        "aggregated totals"
    );

    (totals, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rackplan_catalog::{ConstraintDef, ConstraintKind, ModuleDef, ResourceEffect};

    fn catalog() -> CatalogRegistry {
        let mut catalog = CatalogRegistry::new();
        catalog.register_module(ModuleDef {
            name: "Transformer_100".to_string(),
            effects: vec![
                ResourceEffect {
                    unit: "Grid_Connection".to_string(),
                    delta: -1,
                },
                ResourceEffect {
                    unit: "Space_X".to_string(),
                    delta: 40,
                },
                ResourceEffect {
                    unit: "Usable_Power".to_string(),
                    delta: 100,
                },
            ],
        });
        catalog.register_constraint(ConstraintDef {
            scope: Scope::Section("Server_Square".to_string()),
            unit: "Space_X".to_string(),
            kind: ConstraintKind::Below { amount: 1000 },
        });
        catalog.register_constraint(ConstraintDef {
            scope: Scope::Section("Server_Square".to_string()),
            unit: "Processing".to_string(),
            kind: ConstraintKind::Above { amount: 1000 },
        });
        catalog
    }

    fn section() -> Option<String> {
        Some("Server_Square".to_string())
    }

    #[test]
    fn test_dual_accumulation() {
        let catalog = catalog();
        let mut ledger = PlacementLedger::new();
        ledger.insert("Transformer_100", section(), 0, 0);

        let (totals, diags) = aggregate(&catalog, &ledger);
        assert!(diags.is_empty());

        let scope = Scope::Section("Server_Square".to_string());
        assert_eq!(totals.get(&scope, "Space_X"), 40);
        assert_eq!(totals.get(&scope, "Usable_Power"), 100);
        assert_eq!(totals.get(&scope, "Grid_Connection"), -1);
        assert_eq!(totals.get(&Scope::Global, "Space_X"), 40);
        assert_eq!(totals.get(&Scope::Global, "Usable_Power"), 100);
    }

    #[test]
    fn test_constrained_pairs_are_pre_zeroed() {
        let catalog = catalog();
        let ledger = PlacementLedger::new();

        let (totals, _) = aggregate(&catalog, &ledger);

        let scope = Scope::Section("Server_Square".to_string());
        let units: Vec<&str> = totals.units(&scope).map(|(u, _)| u).collect();
        assert!(units.contains(&"Processing"));
        assert_eq!(totals.get(&scope, "Processing"), 0);
    }

    #[test]
    fn test_global_placement_skips_section_scopes() {
        let catalog = catalog();
        let mut ledger = PlacementLedger::new();
        ledger.insert("Transformer_100", None, 0, 0);

        let (totals, _) = aggregate(&catalog, &ledger);

        assert_eq!(totals.get(&Scope::Global, "Usable_Power"), 100);
        assert_eq!(
            totals.get(&Scope::Section("Server_Square".to_string()), "Usable_Power"),
            0
        );
    }

    #[test]
    fn test_order_independence() {
        let catalog = catalog();

        let mut forward = PlacementLedger::new();
        forward.insert("Transformer_100", section(), 0, 0);
        forward.insert("Transformer_100", None, 1, 1);
        forward.insert("Transformer_100", section(), 2, 2);

        // Same placement set, restored in a scrambled insertion order
        let mut scrambled = PlacementLedger::new();
        let records: Vec<_> = forward.iter().cloned().collect();
        for record in records.iter().rev() {
            scrambled.restore(record.clone());
        }

        let (a, _) = aggregate(&catalog, &forward);
        let (b, _) = aggregate(&catalog, &scrambled);
        assert_eq!(a, b);
    }

    #[test]
    fn test_add_then_remove_restores_totals() {
        let catalog = catalog();
        let mut ledger = PlacementLedger::new();
        ledger.insert("Transformer_100", section(), 0, 0);

        let (before, _) = aggregate(&catalog, &ledger);

        let id = ledger.insert("Transformer_100", section(), 5, 5);
        ledger.remove(id).unwrap();

        let (after, _) = aggregate(&catalog, &ledger);
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_module_skipped_with_diagnostic() {
        let catalog = catalog();
        let mut ledger = PlacementLedger::new();
        ledger.insert("Transformer_100", section(), 0, 0);
        ledger.insert("Ghost_Module", section(), 1, 1);

        let (totals, diags) = aggregate(&catalog, &ledger);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::UnknownModule);
        // The known placement still counted
        assert_eq!(totals.get(&Scope::Global, "Usable_Power"), 100);
    }

    #[test]
    fn test_section_absent_from_constraints_accumulates() {
        let catalog = catalog();
        let mut ledger = PlacementLedger::new();
        ledger.insert("Transformer_100", Some("Retired_Wing".to_string()), 0, 0);

        let (totals, diags) = aggregate(&catalog, &ledger);

        assert!(diags.is_empty());
        assert_eq!(
            totals.get(&Scope::Section("Retired_Wing".to_string()), "Usable_Power"),
            100
        );
        assert_eq!(totals.get(&Scope::Global, "Usable_Power"), 100);
    }
}
