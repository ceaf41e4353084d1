//! Catalog registry for loading and managing definitions

use crate::constraint::{ConstraintDef, ConstraintFile, Scope};
use crate::diagnostics::Diagnostic;
use crate::module::{ModuleDef, ModuleFile};
use rackplan_core::Result;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::warn;

/// The two units that measure a module's spatial footprint.
///
/// The evaluator checks these against the boundary envelope rather than a
/// per-row threshold, and aggregation always treats them as consumption.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FootprintUnits {
    pub x_unit: String,
    pub y_unit: String,
}

impl Default for FootprintUnits {
    fn default() -> Self {
        Self {
            x_unit: "Space_X".to_string(),
            y_unit: "Space_Y".to_string(),
        }
    }
}

impl FootprintUnits {
    pub fn contains(&self, unit: &str) -> bool {
        unit == self.x_unit || unit == self.y_unit
    }
}

/// Optional `catalog.toml` at the catalog root
#[derive(Debug, Default, Deserialize)]
struct CatalogConfigFile {
    #[serde(default)]
    footprint: Option<FootprintUnits>,
}

/// Registry that holds all loaded module and constraint definitions.
///
/// Read-only once loaded; the engine treats it as an immutable lookup.
#[derive(Debug, Default)]
pub struct CatalogRegistry {
    modules: HashMap<String, ModuleDef>,
    constraints: Vec<ConstraintDef>,
    footprint: FootprintUnits,
    diagnostics: Vec<Diagnostic>,
}

impl CatalogRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a directory structure
    ///
    /// Expects:
    /// - `path/catalog.toml` for optional footprint configuration
    /// - `path/modules/*.toml` for module definitions
    /// - `path/sections/*.toml` for constraint definitions
    pub fn load_from_directory<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut registry = Self::new();
        let path = path.as_ref();

        let config_path = path.join("catalog.toml");
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: CatalogConfigFile = toml::from_str(&content)?;
            if let Some(footprint) = config.footprint {
                registry.footprint = footprint;
            }
        }

        let modules_path = path.join("modules");
        if modules_path.exists() {
            for entry in fs::read_dir(&modules_path)? {
                let entry = entry?;
                let file_path = entry.path();
                if file_path.extension().map(|e| e == "toml").unwrap_or(false) {
                    registry.load_module_file(&file_path)?;
                }
            }
        }

        let sections_path = path.join("sections");
        if sections_path.exists() {
            for entry in fs::read_dir(&sections_path)? {
                let entry = entry?;
                let file_path = entry.path();
                if file_path.extension().map(|e| e == "toml").unwrap_or(false) {
                    registry.load_constraint_file(&file_path)?;
                }
            }
        }

        for diag in &registry.diagnostics {
            warn!(kind = ?diag.kind, "{}", diag.message);
        }

        Ok(registry)
    }

    /// Load module definitions from a TOML file
    pub fn load_module_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.load_module_string(&content)
    }

    /// Load module definitions from a TOML string
    pub fn load_module_string(&mut self, content: &str) -> Result<()> {
        let file: ModuleFile = toml::from_str(content)?;
        let footprint_units = [self.footprint.x_unit.clone(), self.footprint.y_unit.clone()];
        let footprint_refs: Vec<&str> = footprint_units.iter().map(|s| s.as_str()).collect();

        for raw in file.module {
            let def = raw.normalize(&footprint_refs, &mut self.diagnostics);
            self.modules.insert(def.name.clone(), def);
        }

        Ok(())
    }

    /// Load constraint definitions from a TOML file
    pub fn load_constraint_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.load_constraint_string(&content)
    }

    /// Load constraint definitions from a TOML string
    pub fn load_constraint_string(&mut self, content: &str) -> Result<()> {
        let file: ConstraintFile = toml::from_str(content)?;

        for raw in file.constraint {
            let def = raw.normalize(&mut self.diagnostics);
            self.constraints.push(def);
        }

        Ok(())
    }

    /// Register a module definition directly
    pub fn register_module(&mut self, def: ModuleDef) {
        self.modules.insert(def.name.clone(), def);
    }

    /// Register a constraint definition directly
    pub fn register_constraint(&mut self, def: ConstraintDef) {
        self.constraints.push(def);
    }

    /// Get a module definition by name
    pub fn get_module(&self, name: &str) -> Option<&ModuleDef> {
        self.modules.get(name)
    }

    /// All constraint definitions, in load order
    pub fn constraints(&self) -> &[ConstraintDef] {
        &self.constraints
    }

    /// All scopes referenced by the constraint set
    pub fn constraint_scopes(&self) -> BTreeSet<&Scope> {
        self.constraints.iter().map(|c| &c.scope).collect()
    }

    /// The configured footprint axis units
    pub fn footprint(&self) -> &FootprintUnits {
        &self.footprint
    }

    /// Override the footprint axis units (for building catalogs in code)
    pub fn set_footprint(&mut self, footprint: FootprintUnits) {
        self.footprint = footprint;
    }

    /// Diagnostics collected while loading (ambiguous rows, sentinels)
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// List all module names
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.keys().map(|s| s.as_str()).collect()
    }

    /// Number of loaded modules
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry has no modules and no constraints
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintKind;

    fn sample_modules() -> &'static str {
        r#"
[[module]]
name = "Transformer_100"

[[module.effect]]
unit = "Grid_Connection"
amount = 1
input = true

[[module.effect]]
unit = "Space_X"
amount = 40

[[module.effect]]
unit = "Usable_Power"
amount = 100
output = true
"#
    }

    fn sample_constraints() -> &'static str {
        r#"
[[constraint]]
section = "Server_Square"
unit = "Space_X"
amount = 1000
below = true

[[constraint]]
section = "Server_Square"
unit = "Processing"
amount = 1000
above = true

[[constraint]]
unit = "Price"
minimize = true
"#
    }

    #[test]
    fn test_load_modules_from_string() {
        let mut registry = CatalogRegistry::new();
        registry.load_module_string(sample_modules()).unwrap();

        let def = registry.get_module("Transformer_100").unwrap();
        assert_eq!(def.effects.len(), 3);
        // Footprint unit accumulates positively despite having no flags
        let space = def.effects.iter().find(|e| e.unit == "Space_X").unwrap();
        assert_eq!(space.delta, 40);
        assert!(registry.diagnostics().is_empty());
    }

    #[test]
    fn test_load_constraints_from_string() {
        let mut registry = CatalogRegistry::new();
        registry.load_constraint_string(sample_constraints()).unwrap();

        assert_eq!(registry.constraints().len(), 3);
        assert_eq!(
            registry.constraints()[1].kind,
            ConstraintKind::Above { amount: 1000 }
        );
        assert_eq!(registry.constraints()[2].scope, Scope::Global);
    }

    #[test]
    fn test_constraint_scopes() {
        let mut registry = CatalogRegistry::new();
        registry.load_constraint_string(sample_constraints()).unwrap();

        let scopes = registry.constraint_scopes();
        assert_eq!(scopes.len(), 2);
        assert!(scopes.contains(&Scope::Global));
        assert!(scopes.contains(&Scope::Section("Server_Square".to_string())));
    }

    #[test]
    fn test_custom_footprint_units() {
        let mut registry = CatalogRegistry::new();
        registry.set_footprint(FootprintUnits {
            x_unit: "Width".to_string(),
            y_unit: "Depth".to_string(),
        });
        registry
            .load_module_string(
                r#"
[[module]]
name = "Rack"

[[module.effect]]
unit = "Width"
amount = 60
"#,
            )
            .unwrap();

        let def = registry.get_module("Rack").unwrap();
        assert_eq!(def.effects[0].delta, 60);
    }

    #[test]
    fn test_empty_registry() {
        let registry = CatalogRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.module_count(), 0);
    }
}
