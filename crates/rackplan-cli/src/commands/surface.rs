//! Surface coordination commands
//!
//! The authoritative-surface flag lives in the layout file so both
//! CLI-driven surfaces (and their polling loops) see the same value.

use super::{load_session, save_session};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SurfaceCommands {
    /// Show which surface is currently authoritative
    Show,

    /// Hand control to the other surface
    Toggle,
}

pub fn run(cmd: SurfaceCommands, catalog_dir: &str, layout_path: &str) -> Result<()> {
    let (session, mut metadata) = load_session(catalog_dir, layout_path)?;

    match cmd {
        SurfaceCommands::Show => {
            println!("{}", session.surface());
        }
        SurfaceCommands::Toggle => {
            let snapshot = session.toggle_surface();
            metadata.active_surface = snapshot.surface.as_str().to_string();
            save_session(&session, &metadata, layout_path)?;
            println!("Authoritative surface is now: {}", snapshot.surface);
        }
    }

    Ok(())
}
