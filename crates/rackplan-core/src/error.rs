//! Error types for rackplan

use thiserror::Error;

/// The main error type for rackplan operations
#[derive(Debug, Error)]
pub enum RackError {
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Placement not found: {0}")]
    PlacementNotFound(u64),

    #[error("Catalog load error: {0}")]
    CatalogLoadError(String),

    #[error("Layout error: {0}")]
    LayoutError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for rackplan operations
pub type Result<T> = std::result::Result<T, RackError>;

impl From<toml::de::Error> for RackError {
    fn from(err: toml::de::Error) -> Self {
        RackError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for RackError {
    fn from(err: toml::ser::Error) -> Self {
        RackError::TomlSerError(err.to_string())
    }
}
