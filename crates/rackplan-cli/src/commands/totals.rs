//! Aggregated totals command

use super::load_session;
use anyhow::Result;

pub fn run(catalog_dir: &str, layout_path: &str, format: &str) -> Result<()> {
    let (session, _) = load_session(catalog_dir, layout_path)?;
    let (totals, diagnostics) = session.compute_totals();

    if format == "json" {
        let scopes: Vec<serde_json::Value> = totals
            .scopes()
            .map(|scope| {
                let units: serde_json::Map<String, serde_json::Value> = totals
                    .units(scope)
                    .map(|(unit, value)| (unit.to_string(), serde_json::json!(value)))
                    .collect();
                serde_json::json!({
                    "scope": scope.to_string(),
                    "units": units,
                })
            })
            .collect();

        let output = serde_json::json!({
            "scopes": scopes,
            "diagnostics": diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for scope in totals.scopes() {
        println!("{}:", scope);
        for (unit, value) in totals.units(scope) {
            println!("  {}: {}", unit, value);
        }
    }

    for diag in &diagnostics {
        eprintln!("warning: {}", diag);
    }

    Ok(())
}
