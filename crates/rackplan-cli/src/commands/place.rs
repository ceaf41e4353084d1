//! Placement commands

use super::{load_session, parse_point, save_session};
use anyhow::Result;
use clap::Subcommand;
use rackplan_core::PlacementId;

#[derive(Subcommand)]
pub enum PlaceCommands {
    /// Place a module instance
    Add {
        /// Module name from the catalog
        module: String,

        /// Section to place the module in (global when omitted)
        #[arg(long)]
        section: Option<String>,

        /// Position as "x,y"
        #[arg(long)]
        at: String,
    },

    /// Move an existing placement
    Move {
        /// Placement id
        id: u64,

        /// New position as "x,y"
        #[arg(long)]
        to: String,
    },

    /// Remove a placement
    Remove {
        /// Placement id
        id: u64,
    },

    /// List all placements
    List,
}

pub fn run(cmd: PlaceCommands, catalog_dir: &str, layout_path: &str) -> Result<()> {
    let (mut session, metadata) = load_session(catalog_dir, layout_path)?;

    match cmd {
        PlaceCommands::Add { module, section, at } => {
            let pos = parse_point(&at)?;
            let id = session.place(&module, section.as_deref(), pos.x, pos.y)?;
            save_session(&session, &metadata, layout_path)?;
            println!(
                "Placed {} at ({}, {}) as placement {}",
                module, pos.x, pos.y, id
            );
        }
        PlaceCommands::Move { id, to } => {
            let pos = parse_point(&to)?;
            session.move_placement(PlacementId::from_raw(id), pos.x, pos.y)?;
            save_session(&session, &metadata, layout_path)?;
            println!("Moved placement {} to ({}, {})", id, pos.x, pos.y);
        }
        PlaceCommands::Remove { id } => {
            session.remove_placement(PlacementId::from_raw(id))?;
            save_session(&session, &metadata, layout_path)?;
            println!("Removed placement {}", id);
        }
        PlaceCommands::List => {
            if session.ledger().is_empty() {
                println!("No placements.");
                return Ok(());
            }
            for record in session.ledger().iter() {
                println!(
                    "  {}  {}  ({}, {})  {}",
                    record.id,
                    record.module,
                    record.x,
                    record.y,
                    record.section.as_deref().unwrap_or("global"),
                );
            }
        }
    }

    Ok(())
}
