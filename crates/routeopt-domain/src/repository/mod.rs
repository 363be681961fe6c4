//! Repository trait definitions for data sources

use crate::model::{CenterCatalog, Zone};
use routeopt_types::Error;

/// Source of the zone dataset (CSV file, generator, API)
pub trait ZoneRepository {
    /// Load all zones, in their source order
    fn find_all(&self) -> Result<Vec<Zone>, Error>;
}

/// Source of the distribution center catalog
pub trait CenterRepository {
    /// Load the catalog, already validated
    fn load(&self) -> Result<CenterCatalog, Error>;
}
