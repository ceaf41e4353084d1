//! CLI command implementations

pub mod boundary;
pub mod init;
pub mod place;
pub mod surface;
pub mod totals;
pub mod validate;

use anyhow::{Context, Result};
use rackplan_catalog::CatalogRegistry;
use rackplan_core::Point;
use rackplan_engine::{DesignSession, Surface};
use rackplan_layout::{load_layout, save_layout, LayoutMetadata};

/// Load catalog + layout into a session, keeping the layout metadata so the
/// command can write the file back afterwards.
pub(crate) fn load_session(catalog_dir: &str, layout_path: &str) -> Result<(DesignSession, LayoutMetadata)> {
    let catalog = CatalogRegistry::load_from_directory(catalog_dir)
        .with_context(|| format!("failed to load catalog from {}", catalog_dir))?;

    let (ledger, boundary, file) = load_layout(layout_path)
        .with_context(|| format!("failed to load layout from {}", layout_path))?;

    let surface: Surface = file
        .layout
        .active_surface
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    Ok((
        DesignSession::from_parts(catalog, ledger, boundary, surface),
        file.layout,
    ))
}

/// Write the session's ledger and boundary back to the layout file
pub(crate) fn save_session(
    session: &DesignSession,
    metadata: &LayoutMetadata,
    layout_path: &str,
) -> Result<()> {
    save_layout(layout_path, session.ledger(), session.boundary(), metadata)
        .with_context(|| format!("failed to save layout to {}", layout_path))?;
    Ok(())
}

/// Parse an "x,y" coordinate pair
pub(crate) fn parse_point(s: &str) -> Result<Point> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        anyhow::bail!("expected 'x,y', got '{}'", s);
    }
    let x: i64 = parts[0].trim().parse().context("invalid x coordinate")?;
    let y: i64 = parts[1].trim().parse().context("invalid y coordinate")?;
    Ok(Point::new(x, y))
}
