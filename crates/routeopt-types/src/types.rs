//! Shared data transfer types consumed by the rendering collaborators

use serde::{Deserialize, Serialize};

/// A single circle marker on the map view.
///
/// One marker per distribution center (fixed color) plus one per zone,
/// colored by the zone's effective center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Display color name (e.g. "red", "blue")
    pub color: String,
    pub radius: f32,
}

/// One row of the assignment grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub zone: String,
    pub lat: f64,
    pub lng: f64,
    /// Static "current DC" label from the input data, if any
    pub current_dc: Option<String>,
    pub optimal_dc: String,
    pub user_input_dc: String,
    pub user_color: String,
    /// Illustrative order volume metric, passed through from the input data
    pub order_volume: Option<f64>,
    /// True when the user selection diverges from the computed optimum
    pub flagged: bool,
}
