//! Rackplan Layout - The mutable state of a design
//!
//! This crate owns the placement ledger (the authoritative set of placed
//! module instances) and the room boundary polygon, plus the TOML layout
//! file format both editing surfaces read and write.

mod boundary;
mod format;
mod ledger;

pub use boundary::BoundaryPolygon;
pub use format::{
    load_layout, load_layout_string, save_layout, save_layout_string, BoundaryDef, LayoutFile,
    LayoutMetadata,
};
pub use ledger::{PlacementLedger, PlacementRecord};
