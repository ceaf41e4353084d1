//! Rackplan CLI - Command-line interface for the rackplan engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{boundary, init, place, surface, totals, validate};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rackplan")]
#[command(about = "Data-center layout planning and constraint validation", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the catalog directory
    #[arg(long, default_value = "catalog", global = true)]
    catalog: String,

    /// Path to the layout file
    #[arg(long, default_value = "layout.toml", global = true)]
    layout: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new rackplan project
    Init {
        /// Project name/directory
        name: String,
    },

    /// Placement operations
    #[command(subcommand)]
    Place(place::PlaceCommands),

    /// Replace the room boundary polygon
    Boundary {
        /// Boundary points as "x,y" pairs (e.g. "0,0 1000,0 1000,500 0,500")
        points: Vec<String>,
    },

    /// Show aggregated totals per scope
    Totals {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate the layout against its constraints
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Surface coordination operations
    #[command(subcommand)]
    Surface(surface::SurfaceCommands),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name } => init::run(&name),
        Commands::Place(cmd) => place::run(cmd, &cli.catalog, &cli.layout),
        Commands::Boundary { points } => boundary::run(&points, &cli.catalog, &cli.layout),
        Commands::Totals { format } => totals::run(&cli.catalog, &cli.layout, &format),
        Commands::Validate { format } => validate::run(&cli.catalog, &cli.layout, &format),
        Commands::Surface(cmd) => surface::run(cmd, &cli.catalog, &cli.layout),
    }
}
