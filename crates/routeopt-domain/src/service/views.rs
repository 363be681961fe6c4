//! Read-only view projections for the map and grid collaborators

use routeopt_types::{GridRow, MapMarker};

use crate::model::{AssignmentTable, CenterCatalog, Zone};

/// Marker radius for distribution centers
pub const CENTER_RADIUS: f32 = 20.0;
/// Zone marker radius before any assignment exists
pub const ZONE_RADIUS_UNASSIGNED: f32 = 17.0;
/// Zone marker radius once an assignment exists
pub const ZONE_RADIUS_ASSIGNED: f32 = 15.0;

/// Markers for the map view: every catalog center, then every zone.
///
/// Zones are colored by their effective center: the user selection when an
/// assignment exists, else the zone's static original color.
pub fn map_markers(
    zones: &[Zone],
    table: Option<&AssignmentTable>,
    catalog: &CenterCatalog,
) -> Vec<MapMarker> {
    let mut markers = Vec::with_capacity(catalog.len() + zones.len());
    for center in catalog.centers() {
        markers.push(MapMarker {
            name: center.name.clone(),
            lat: center.lat,
            lng: center.lng,
            color: center.color.clone(),
            radius: CENTER_RADIUS,
        });
    }
    match table {
        Some(table) => {
            for row in &table.rows {
                markers.push(MapMarker {
                    name: row.zone.name.clone(),
                    lat: row.zone.lat,
                    lng: row.zone.lng,
                    color: row.user_color.clone(),
                    radius: ZONE_RADIUS_ASSIGNED,
                });
            }
        }
        None => {
            for zone in zones {
                markers.push(MapMarker {
                    name: zone.name.clone(),
                    lat: zone.lat,
                    lng: zone.lng,
                    color: zone.color.clone(),
                    radius: ZONE_RADIUS_UNASSIGNED,
                });
            }
        }
    }
    markers
}

/// Rows for the grid view, flagged where the user diverges from the optimum
pub fn grid_rows(table: &AssignmentTable) -> Vec<GridRow> {
    table
        .rows
        .iter()
        .map(|row| GridRow {
            zone: row.zone.name.clone(),
            lat: row.zone.lat,
            lng: row.zone.lng,
            current_dc: row.zone.current_dc.clone(),
            optimal_dc: row.optimal_dc.clone(),
            user_input_dc: row.user_input_dc.clone(),
            user_color: row.user_color.clone(),
            order_volume: row.zone.order_volume,
            flagged: row.is_diverged(),
        })
        .collect()
}
