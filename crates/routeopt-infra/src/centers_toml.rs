//! TOML loader for the distribution center catalog
//!
//! Optional override of the built-in catalog:
//!
//! ```toml
//! [[centers]]
//! name = "Fresno"
//! lat = 36.74773
//! lng = -119.77237
//! color = "red"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use routeopt_domain::model::{CenterCatalog, DistributionCenter};
use routeopt_domain::repository::CenterRepository;
use routeopt_types::{ConfigError, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    centers: Vec<DistributionCenter>,
}

/// Load and validate a center catalog from a TOML file.
///
/// Catalog order follows file order, which fixes the tie-break enumeration.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CenterCatalog> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

fn parse_catalog(content: &str) -> Result<CenterCatalog> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    CenterCatalog::new(file.centers)
}

/// File-backed center repository
pub struct TomlCenterRepository {
    path: PathBuf,
}

impl TomlCenterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CenterRepository for TomlCenterRepository {
    fn load(&self) -> Result<CenterCatalog> {
        load_catalog(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeopt_types::Error;

    #[test]
    fn test_parse_catalog() {
        let content = r#"
            [[centers]]
            name = "Fresno"
            lat = 36.74773
            lng = -119.77237
            color = "red"

            [[centers]]
            name = "SLC"
            lat = 40.76078
            lng = -111.89105
            color = "blue"
        "#;
        let catalog = parse_catalog(content).unwrap();
        assert_eq!(catalog.len(), 2);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Fresno", "SLC"]);
        assert_eq!(
            catalog.get("Fresno").map(|c| c.lng),
            Some(-119.77237)
        );
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = parse_catalog("[[centers]\nname = ");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_empty_catalog_rejected_on_load() {
        let result = parse_catalog("centers = []");
        assert!(matches!(result, Err(Error::EmptyCenters)));
    }

    #[test]
    fn test_duplicate_center_rejected_on_load() {
        let content = r#"
            [[centers]]
            name = "Fresno"
            lat = 1.0
            lng = 2.0
            color = "red"

            [[centers]]
            name = "Fresno"
            lat = 3.0
            lng = 4.0
            color = "blue"
        "#;
        let result = parse_catalog(content);
        assert!(matches!(result, Err(Error::DuplicateCenter(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("centers.toml");
        std::fs::write(
            &path,
            "[[centers]]\nname = \"Fresno\"\nlat = 36.7\nlng = -119.8\ncolor = \"red\"\n",
        )
        .unwrap();
        let catalog = TomlCenterRepository::new(&path).load().unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
