//! Error types for routeopt

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No distribution centers to assign against.
    #[error("Distribution center set is empty")]
    EmptyCenters,

    /// Two catalog entries share a name.
    #[error("Duplicate distribution center: {0}")]
    DuplicateCenter(String),

    /// An edited row references a center that is not in the catalog.
    #[error("Zone {zone}: unknown distribution center {center:?}")]
    UnknownCenter { zone: String, center: String },

    #[error("Zone CSV error: {0}")]
    ZoneCsv(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
