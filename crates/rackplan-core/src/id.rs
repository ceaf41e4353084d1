//! Stable placement identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable identifier for a placed module instance.
///
/// Ids are allocated by the ledger that owns the placement and persist
/// across layout save/load cycles, so both editing surfaces can refer to
/// the same placement without re-resolving positions. Two ledgers allocate
/// independent sequences.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementId(pub u64);

impl PlacementId {
    /// Wrap a raw id value (deserialization, lookups by number)
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlacementId({})", self.0)
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
