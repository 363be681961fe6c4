//! Distribution center catalog

use serde::{Deserialize, Serialize};

use routeopt_types::{Error, Result};

/// A distribution center with a fixed location and display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCenter {
    /// Center name (e.g. "Fresno", "SLC")
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Display color name (e.g. "red", "blue")
    pub color: String,
}

impl DistributionCenter {
    pub fn new(name: &str, lat: f64, lng: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lng,
            color: color.to_string(),
        }
    }
}

/// The closed, ordered set of distribution centers for a session.
///
/// The position of a center in the catalog is its enumeration order: distance
/// ties resolve to the earliest entry, and every per-center listing (grid
/// summaries, map legend, exports) iterates in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterCatalog {
    centers: Vec<DistributionCenter>,
}

impl CenterCatalog {
    /// Build a catalog, validating it up front.
    ///
    /// Fails with `EmptyCenters` for an empty list and `DuplicateCenter` when
    /// two entries share a name, so an unknown or ambiguous center name can
    /// never enter the system through configuration.
    pub fn new(centers: Vec<DistributionCenter>) -> Result<Self> {
        if centers.is_empty() {
            return Err(Error::EmptyCenters);
        }
        for (i, center) in centers.iter().enumerate() {
            if centers[..i].iter().any(|c| c.name == center.name) {
                return Err(Error::DuplicateCenter(center.name.clone()));
            }
        }
        Ok(Self { centers })
    }

    pub fn centers(&self) -> &[DistributionCenter] {
        &self.centers
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Find a center by name
    pub fn get(&self, name: &str) -> Option<&DistributionCenter> {
        self.centers.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Display color for a center name
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.color.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.centers.iter().map(|c| c.name.as_str())
    }
}
