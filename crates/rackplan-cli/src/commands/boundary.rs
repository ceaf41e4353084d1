//! Boundary replacement command

use super::{load_session, parse_point, save_session};
use anyhow::Result;

pub fn run(points: &[String], catalog_dir: &str, layout_path: &str) -> Result<()> {
    let (mut session, metadata) = load_session(catalog_dir, layout_path)?;

    let parsed = points
        .iter()
        .map(|p| parse_point(p))
        .collect::<Result<Vec<_>>>()?;

    session.replace_boundary(parsed);
    let bounds = session.boundary().bounding_box();
    save_session(&session, &metadata, layout_path)?;

    println!(
        "Boundary replaced: {} point(s), envelope {} x {}",
        session.boundary().points().len(),
        bounds.width(),
        bounds.height()
    );

    Ok(())
}
