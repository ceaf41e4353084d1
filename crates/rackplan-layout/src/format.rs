//! Layout file format and load/save

use crate::boundary::BoundaryPolygon;
use crate::ledger::{PlacementLedger, PlacementRecord};
use rackplan_core::{Point, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root structure of a layout TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub layout: LayoutMetadata,
    #[serde(default)]
    pub placement: Vec<PlacementRecord>,
    #[serde(default)]
    pub boundary: BoundaryDef,
}

/// Layout metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Which editing surface currently holds the advisory lock
    #[serde(default = "default_surface")]
    pub active_surface: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_surface() -> String {
    "website".to_string()
}

/// Boundary points as stored in the layout file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundaryDef {
    #[serde(default)]
    pub points: Vec<Point>,
}

impl LayoutFile {
    /// Create a new empty layout file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            layout: LayoutMetadata {
                name: name.into(),
                version: default_version(),
                active_surface: default_surface(),
            },
            placement: Vec::new(),
            boundary: BoundaryDef::default(),
        }
    }
}

/// Load a layout from a TOML file
pub fn load_layout<P: AsRef<Path>>(path: P) -> Result<(PlacementLedger, BoundaryPolygon, LayoutFile)> {
    let content = fs::read_to_string(path)?;
    load_layout_string(&content)
}

/// Load a layout from a TOML string, rebuilding the ledger and boundary
pub fn load_layout_string(content: &str) -> Result<(PlacementLedger, BoundaryPolygon, LayoutFile)> {
    let file: LayoutFile = toml::from_str(content)?;

    let mut ledger = PlacementLedger::new();
    for record in &file.placement {
        ledger.restore(record.clone());
    }

    let boundary = BoundaryPolygon::from_points(file.boundary.points.clone());

    Ok((ledger, boundary, file))
}

/// Save a layout to a TOML file
pub fn save_layout<P: AsRef<Path>>(
    path: P,
    ledger: &PlacementLedger,
    boundary: &BoundaryPolygon,
    metadata: &LayoutMetadata,
) -> Result<()> {
    let content = save_layout_string(ledger, boundary, metadata)?;
    fs::write(path, content)?;
    Ok(())
}

/// Serialize a layout to a TOML string. Placements are emitted in id order,
/// so saves are deterministic.
pub fn save_layout_string(
    ledger: &PlacementLedger,
    boundary: &BoundaryPolygon,
    metadata: &LayoutMetadata,
) -> Result<String> {
    let file = LayoutFile {
        layout: metadata.clone(),
        placement: ledger.iter().cloned().collect(),
        boundary: BoundaryDef {
            points: boundary.points().to_vec(),
        },
    };

    Ok(toml::to_string_pretty(&file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rackplan_core::PlacementId;

    #[test]
    fn test_layout_file_deserialization() {
        let toml_str = r#"
[layout]
name = "Hall A"
active_surface = "vr"

[[placement]]
id = 1
module = "Transformer_100"
section = "Server_Square"
x = 10
y = 20

[[placement]]
id = 2
module = "Cooling_Unit"
x = 50
y = 60

[boundary]
points = [{ x = 0, y = 0 }, { x = 1000, y = 0 }, { x = 1000, y = 500 }, { x = 0, y = 500 }]
"#;

        let (ledger, boundary, file) = load_layout_string(toml_str).unwrap();
        assert_eq!(file.layout.name, "Hall A");
        assert_eq!(file.layout.active_surface, "vr");
        assert_eq!(ledger.len(), 2);
        assert!(ledger
            .get(PlacementId::from_raw(2))
            .unwrap()
            .section
            .is_none());
        assert_eq!(boundary.bounding_box().width(), 1000);
    }

    #[test]
    fn test_missing_sections_default() {
        let toml_str = r#"
[layout]
name = "Empty"
"#;

        let (ledger, boundary, file) = load_layout_string(toml_str).unwrap();
        assert!(ledger.is_empty());
        assert!(boundary.is_empty());
        assert_eq!(file.layout.active_surface, "website");
    }

    #[test]
    fn test_round_trip() {
        let mut ledger = PlacementLedger::new();
        let id = ledger.insert("Transformer_100", Some("Server_Square".to_string()), 3, 4);
        let boundary = BoundaryPolygon::from_points(vec![Point::new(0, 0), Point::new(9, 9)]);
        let mut metadata = LayoutFile::new("Round Trip").layout;
        metadata.active_surface = "vr".to_string();

        let content = save_layout_string(&ledger, &boundary, &metadata).unwrap();
        let (reloaded, reboundary, file) = load_layout_string(&content).unwrap();

        assert_eq!(file.layout.name, "Round Trip");
        // The surface flag must survive the trip, not snap back to default
        assert_eq!(file.layout.active_surface, "vr");
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(id).unwrap(), ledger.get(id).unwrap());
        assert_eq!(reboundary, boundary);
    }
}
