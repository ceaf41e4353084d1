//! Constraint evaluation

use crate::report::{HintDirection, OptimizationHint, ValidationReport, Violation};
use crate::totals::Totals;
use rackplan_catalog::{CatalogRegistry, ConstraintKind, Diagnostic};
use rackplan_core::BoundingBox;
use tracing::warn;

/// Evaluate the constraint set against aggregated totals.
///
/// Threshold checks are inclusive: `Below(a)` passes values up to and
/// including `a`, `Above(a)` down to and including `a`. Footprint-unit rows
/// are always checked against the boundary envelope (x axis against width,
/// y axis against height); their own row amount is never consulted, since
/// the envelope is the sole source of the space upper bounds. A footprint
/// row flagged minimize or maximize still emits its optimization hint on
/// top of the envelope check.
///
/// The pass always runs to completion and is idempotent; `diagnostics`
/// collected upstream (catalog load, aggregation) are carried into the
/// report unchanged so the violation list is a complete snapshot.
pub fn evaluate(
    catalog: &CatalogRegistry,
    totals: &Totals,
    bounds: &BoundingBox,
    diagnostics: Vec<Diagnostic>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.diagnostics = diagnostics;

    let mut constraints: Vec<_> = catalog.constraints().iter().collect();
    constraints.sort_by(|a, b| (&a.scope, &a.unit).cmp(&(&b.scope, &b.unit)));

    let footprint = catalog.footprint();

    for def in constraints {
        let actual = totals.get(&def.scope, &def.unit);

        if footprint.contains(&def.unit) {
            match def.kind {
                ConstraintKind::Unconstrained => continue,
                ConstraintKind::Minimize => report.hints.push(OptimizationHint {
                    scope: def.scope.clone(),
                    unit: def.unit.clone(),
                    direction: HintDirection::Minimize,
                    current: actual,
                }),
                ConstraintKind::Maximize => report.hints.push(OptimizationHint {
                    scope: def.scope.clone(),
                    unit: def.unit.clone(),
                    direction: HintDirection::Maximize,
                    current: actual,
                }),
                _ => {}
            }

            let available = if def.unit == footprint.x_unit {
                bounds.width()
            } else {
                bounds.height()
            };

            if actual > available {
                let message = format!(
                    "{}: used {} ({}) exceeds available {} ({})",
                    def.scope, def.unit, actual, def.unit, available
                );
                warn!("{}", message);
                report.violations.push(Violation {
                    scope: def.scope.clone(),
                    unit: def.unit.clone(),
                    kind: ConstraintKind::Below { amount: available },
                    required: available,
                    actual,
                    message,
                });
            }
            continue;
        }

        match def.kind {
            ConstraintKind::Below { amount } => {
                if actual > amount {
                    let message = format!(
                        "{}: {} value ({}) should be at or below {}",
                        def.scope, def.unit, actual, amount
                    );
                    warn!("{}", message);
                    report.violations.push(Violation {
                        scope: def.scope.clone(),
                        unit: def.unit.clone(),
                        kind: def.kind,
                        required: amount,
                        actual,
                        message,
                    });
                }
            }
            ConstraintKind::Above { amount } => {
                if actual < amount {
                    let message = format!(
                        "{}: {} value ({}) should be at or above {}",
                        def.scope, def.unit, actual, amount
                    );
                    warn!("{}", message);
                    report.violations.push(Violation {
                        scope: def.scope.clone(),
                        unit: def.unit.clone(),
                        kind: def.kind,
                        required: amount,
                        actual,
                        message,
                    });
                }
            }
            ConstraintKind::Minimize => report.hints.push(OptimizationHint {
                scope: def.scope.clone(),
                unit: def.unit.clone(),
                direction: HintDirection::Minimize,
                current: actual,
            }),
            ConstraintKind::Maximize => report.hints.push(OptimizationHint {
                scope: def.scope.clone(),
                unit: def.unit.clone(),
                direction: HintDirection::Maximize,
                current: actual,
            }),
            ConstraintKind::Unconstrained => {}
        }
    }

    report
}
