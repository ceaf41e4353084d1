//! Layout validation command

use super::load_session;
use anyhow::Result;
use rackplan_engine::ValidationReport;

pub fn run(catalog_dir: &str, layout_path: &str, format: &str) -> Result<()> {
    let (session, _) = load_session(catalog_dir, layout_path)?;
    let report = session.validate();

    if format == "json" {
        print_report_json(&report)?;
    } else {
        print_report_text(&report);
    }

    if !report.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report_text(report: &ValidationReport) {
    if report.violations.is_empty() {
        println!("All constraints passed.");
    } else {
        println!("{}", report.summary());
        println!();
        for violation in &report.violations {
            println!("  [FAIL] {}", violation.message);
        }
    }

    for hint in &report.hints {
        println!(
            "  [hint] {}: {} = {} ({:?})",
            hint.scope, hint.unit, hint.current, hint.direction
        );
    }

    for diag in &report.diagnostics {
        println!("  [warn] {}", diag);
    }
}

fn print_report_json(report: &ValidationReport) -> Result<()> {
    let output = serde_json::json!({
        "valid": report.is_valid(),
        "summary": report.summary(),
        "violations": report.violations,
        "hints": report.hints,
        "diagnostics": report.diagnostics,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
