//! The placement ledger

use rackplan_core::{PlacementId, RackError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// One placed module instance.
///
/// The module and section bindings are fixed at creation; only the position
/// may change afterwards. The ledger enforces this by never handing out a
/// mutable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub id: PlacementId,
    pub module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub x: i64,
    pub y: i64,
}

/// The authoritative set of currently active placements.
///
/// UIs hold only cached copies; every mutation goes through insert/move/
/// remove here. BTreeMap keeps iteration (and saves) deterministic. The
/// ledger also allocates placement ids, so independent sessions do not
/// share an id sequence.
#[derive(Debug, Clone)]
pub struct PlacementLedger {
    placements: BTreeMap<PlacementId, PlacementRecord>,
    next_id: u64,
}

impl Default for PlacementLedger {
    fn default() -> Self {
        Self {
            placements: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl PlacementLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a module instance, optionally inside a section
    pub fn insert(
        &mut self,
        module: impl Into<String>,
        section: Option<String>,
        x: i64,
        y: i64,
    ) -> PlacementId {
        let record = PlacementRecord {
            id: PlacementId::from_raw(self.next_id),
            module: module.into(),
            section,
            x,
            y,
        };
        self.next_id += 1;
        let id = record.id;

        info!(
            placement = %id,
            module = %record.module,
            section = record.section.as_deref().unwrap_or("none"),
            x, y,
            "placed module"
        );
        self.placements.insert(id, record);
        id
    }

    /// Restore a previously saved record, keeping its id. Bumps the
    /// allocator past the restored id so later inserts never collide.
    pub fn restore(&mut self, record: PlacementRecord) {
        self.next_id = self.next_id.max(record.id.raw() + 1);
        self.placements.insert(record.id, record);
    }

    /// Move a placement to a new position. Position is the only mutable
    /// field of a placement.
    pub fn move_to(&mut self, id: PlacementId, x: i64, y: i64) -> Result<()> {
        let record = self
            .placements
            .get_mut(&id)
            .ok_or(RackError::PlacementNotFound(id.raw()))?;
        record.x = x;
        record.y = y;
        info!(placement = %id, x, y, "moved placement");
        Ok(())
    }

    /// Remove a placement, returning the removed record
    pub fn remove(&mut self, id: PlacementId) -> Result<PlacementRecord> {
        let record = self
            .placements
            .remove(&id)
            .ok_or(RackError::PlacementNotFound(id.raw()))?;
        info!(placement = %id, module = %record.module, "removed placement");
        Ok(record)
    }

    /// Look up a placement by id
    pub fn get(&self, id: PlacementId) -> Option<&PlacementRecord> {
        self.placements.get(&id)
    }

    /// Iterate all placements in id order
    pub fn iter(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.placements.values()
    }

    /// Number of active placements
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut ledger = PlacementLedger::new();
        let id = ledger.insert("Transformer_100", Some("Server_Square".to_string()), 10, 20);

        let record = ledger.get(id).unwrap();
        assert_eq!(record.module, "Transformer_100");
        assert_eq!(record.section.as_deref(), Some("Server_Square"));
        assert_eq!((record.x, record.y), (10, 20));
    }

    #[test]
    fn test_move_changes_only_position() {
        let mut ledger = PlacementLedger::new();
        let id = ledger.insert("Rack", None, 0, 0);

        ledger.move_to(id, 5, 7).unwrap();

        let record = ledger.get(id).unwrap();
        assert_eq!((record.x, record.y), (5, 7));
        assert_eq!(record.module, "Rack");
        assert!(record.section.is_none());
    }

    #[test]
    fn test_move_missing_placement_fails() {
        let mut ledger = PlacementLedger::new();
        let err = ledger.move_to(PlacementId::from_raw(9999), 0, 0);
        assert!(err.is_err());
    }

    #[test]
    fn test_remove_returns_record() {
        let mut ledger = PlacementLedger::new();
        let id = ledger.insert("Rack", None, 1, 2);

        let record = ledger.remove(id).unwrap();
        assert_eq!(record.module, "Rack");
        assert!(ledger.is_empty());
        assert!(ledger.remove(id).is_err());
    }

    #[test]
    fn test_ledgers_allocate_ids_independently() {
        let mut a = PlacementLedger::new();
        let mut b = PlacementLedger::new();

        let first_a = a.insert("Rack", None, 0, 0);
        let second_a = a.insert("Rack", None, 1, 0);
        let first_b = b.insert("Rack", None, 0, 0);

        assert_eq!(first_a.raw(), 1);
        assert_eq!(second_a.raw(), 2);
        // A fresh ledger starts its own sequence
        assert_eq!(first_b.raw(), 1);
    }

    #[test]
    fn test_restore_keeps_id_and_bumps_counter() {
        let mut ledger = PlacementLedger::new();
        ledger.restore(PlacementRecord {
            id: PlacementId::from_raw(500),
            module: "Rack".to_string(),
            section: None,
            x: 0,
            y: 0,
        });

        assert!(ledger.get(PlacementId::from_raw(500)).is_some());
        // New ids must not collide with restored ones
        let fresh = ledger.insert("Rack", None, 0, 0);
        assert!(fresh.raw() > 500);
    }

    #[test]
    fn test_iteration_is_id_ordered() {
        let mut ledger = PlacementLedger::new();
        ledger.restore(PlacementRecord {
            id: PlacementId::from_raw(30),
            module: "B".to_string(),
            section: None,
            x: 0,
            y: 0,
        });
        ledger.restore(PlacementRecord {
            id: PlacementId::from_raw(10),
            module: "A".to_string(),
            section: None,
            x: 0,
            y: 0,
        });

        let modules: Vec<&str> = ledger.iter().map(|r| r.module.as_str()).collect();
        assert_eq!(modules, vec!["A", "B"]);
    }
}
