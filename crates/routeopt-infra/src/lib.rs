//! Infrastructure layer - zone CSV loading, center catalog files

pub mod centers_toml;
pub mod zones_csv;

pub use centers_toml::{load_catalog, TomlCenterRepository};
pub use zones_csv::{load_zones, CsvZoneRepository, ZoneCsvError};
