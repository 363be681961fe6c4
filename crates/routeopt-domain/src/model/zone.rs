//! Zone (city) data type definitions

use serde::{Deserialize, Serialize};

/// A delivery zone as loaded from the zone data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name (unique per dataset)
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Static display color used before any assignment exists
    pub color: String,
    /// "Current DC" label carried in the input data, display only
    pub current_dc: Option<String>,
    /// Illustrative order volume metric, not derived from the assignment
    pub order_volume: Option<f64>,
}

impl Zone {
    pub fn new(name: &str, lat: f64, lng: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lng,
            color: color.to_string(),
            current_dc: None,
            order_volume: None,
        }
    }
}
