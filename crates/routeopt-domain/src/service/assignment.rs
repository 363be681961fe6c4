//! Nearest-center assignment service

use routeopt_types::{Error, Result};

use crate::model::{AssignmentRow, AssignmentTable, CenterCatalog, DistributionCenter, Zone};

/// Planar Euclidean distance over raw (lat, lng) degrees.
///
/// Deliberately not geodesic: the assignment is defined on plain coordinate
/// distance and downstream consumers depend on that behavior.
fn planar_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lng1 - lng2).powi(2)).sqrt()
}

/// Find the center closest to a point.
///
/// Centers are scanned in slice order and only a strictly smaller distance
/// replaces the running minimum, so exact ties resolve to the earliest entry.
pub fn closest_center<'a>(
    centers: &'a [DistributionCenter],
    lat: f64,
    lng: f64,
) -> Result<&'a DistributionCenter> {
    let mut best: Option<(&DistributionCenter, f64)> = None;
    for center in centers {
        let dist = planar_distance(lat, lng, center.lat, center.lng);
        match best {
            Some((_, min_dist)) if dist >= min_dist => {}
            _ => best = Some((center, dist)),
        }
    }
    best.map(|(center, _)| center).ok_or(Error::EmptyCenters)
}

/// Compute the optimal assignment for every zone.
///
/// Produces a new table; the input zones are untouched. Each row starts with
/// `user_input_dc` equal to the computed optimum, with both display colors
/// resolved through the catalog. This is the only operation that takes a
/// session from "no assignment yet" to "assignment exists".
pub fn compute_assignment(zones: &[Zone], catalog: &CenterCatalog) -> Result<AssignmentTable> {
    let mut rows = Vec::with_capacity(zones.len());
    for zone in zones {
        let center = closest_center(catalog.centers(), zone.lat, zone.lng)?;
        rows.push(AssignmentRow {
            zone: zone.clone(),
            optimal_dc: center.name.clone(),
            optimal_color: center.color.clone(),
            user_input_dc: center.name.clone(),
            user_color: center.color.clone(),
        });
    }
    Ok(AssignmentTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_center_catalog() -> CenterCatalog {
        CenterCatalog::new(vec![
            DistributionCenter::new("A", 0.0, 0.0, "red"),
            DistributionCenter::new("B", 10.0, 0.0, "blue"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_centers_rejected() {
        let result = closest_center(&[], 1.0, 1.0);
        assert!(matches!(result, Err(Error::EmptyCenters)));
    }

    #[test]
    fn test_closest_center_picks_minimum() {
        let catalog = two_center_catalog();
        // (4, 0) is 4 from A and 6 from B
        let center = closest_center(catalog.centers(), 4.0, 0.0).unwrap();
        assert_eq!(center.name, "A");
        // (6, 0) is 6 from A and 4 from B
        let center = closest_center(catalog.centers(), 6.0, 0.0).unwrap();
        assert_eq!(center.name, "B");
    }

    #[test]
    fn test_tie_breaks_to_earlier_center() {
        let catalog = two_center_catalog();
        // (5, 0) is equidistant from both
        let center = closest_center(catalog.centers(), 5.0, 0.0).unwrap();
        assert_eq!(center.name, "A");
    }

    #[test]
    fn test_equal_location_centers_always_first() {
        let catalog = CenterCatalog::new(vec![
            DistributionCenter::new("A", 0.0, 0.0, "red"),
            DistributionCenter::new("B", 0.0, 0.0, "blue"),
        ])
        .unwrap();
        for (lat, lng) in [(3.0, 4.0), (-7.0, 2.5), (0.0, 0.0)] {
            let center = closest_center(catalog.centers(), lat, lng).unwrap();
            assert_eq!(center.name, "A");
        }
    }

    #[test]
    fn test_result_is_catalog_member() {
        let catalog = two_center_catalog();
        for (lat, lng) in [(0.1, -0.2), (42.0, 42.0), (-90.0, 180.0)] {
            let center = closest_center(catalog.centers(), lat, lng).unwrap();
            assert!(catalog.contains(&center.name));
        }
    }

    #[test]
    fn test_compute_assignment_enriches_rows() {
        let catalog = two_center_catalog();
        let mut zone = Zone::new("Zone1", 4.0, 0.0, "gray");
        zone.current_dc = Some("B".to_string());
        zone.order_volume = Some(120.0);
        let zones = vec![zone, Zone::new("Zone2", 6.0, 0.0, "gray")];

        let table = compute_assignment(&zones, &catalog).unwrap();
        assert_eq!(table.len(), 2);

        let row = table.get("Zone1").unwrap();
        assert_eq!(row.optimal_dc, "A");
        assert_eq!(row.user_input_dc, "A");
        assert_eq!(row.optimal_color, "red");
        assert_eq!(row.user_color, "red");
        assert!(!row.is_diverged());
        // Original fields pass through untouched
        assert_eq!(row.zone.current_dc.as_deref(), Some("B"));
        assert_eq!(row.zone.order_volume, Some(120.0));
        assert_eq!(row.zone.color, "gray");

        assert_eq!(table.get("Zone2").unwrap().optimal_dc, "B");
    }

    #[test]
    fn test_compute_assignment_is_deterministic() {
        let catalog = two_center_catalog();
        let zones = vec![
            Zone::new("Zone1", 4.9999, 0.0, "gray"),
            Zone::new("Zone2", 5.0001, 0.0, "gray"),
        ];
        let first = compute_assignment(&zones, &catalog).unwrap();
        let second = compute_assignment(&zones, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_assignment_does_not_mutate_input() {
        let catalog = two_center_catalog();
        let zones = vec![Zone::new("Zone1", 4.0, 0.0, "gray")];
        let snapshot = zones.clone();
        let _ = compute_assignment(&zones, &catalog).unwrap();
        assert_eq!(zones, snapshot);
    }
}
