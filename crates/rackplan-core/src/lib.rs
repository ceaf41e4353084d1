//! Rackplan Core - Foundational types for the rackplan engine
//!
//! This crate provides the core types that all other rackplan crates depend on:
//! - `PlacementId` - Stable placement identifiers
//! - `Point`, `BoundingBox` - Layout geometry
//! - Error types and Result alias

mod error;
mod geometry;
mod id;

pub use error::{RackError, Result};
pub use geometry::{BoundingBox, Point};
pub use id::PlacementId;
