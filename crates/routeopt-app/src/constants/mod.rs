//! Built-in distribution center data

use std::sync::LazyLock;

use routeopt_domain::model::{CenterCatalog, DistributionCenter};

/// The seven built-in distribution centers, in enumeration order.
///
/// Order matters: it is the tie-break order for the assignment and the
/// listing order everywhere a per-center breakdown is shown.
pub static DEFAULT_CENTERS: LazyLock<CenterCatalog> = LazyLock::new(|| {
    CenterCatalog::new(vec![
        DistributionCenter::new("Fresno", 36.74773, -119.77237, "red"),
        DistributionCenter::new("SLC", 40.76078, -111.89105, "blue"),
        DistributionCenter::new("Olathe", 38.8814, -94.81913, "green"),
        DistributionCenter::new("Indy", 39.997263, -86.345830, "purple"),
        DistributionCenter::new("Hamburg", 40.5009, -75.9699, "orange"),
        DistributionCenter::new("Macon", 32.84069, -83.6324, "pink"),
        DistributionCenter::new("Charlotte", 35.22709, -80.84313, "gray"),
    ])
    .expect("built-in catalog is non-empty with unique names")
});

/// Default per-center daily capacity figures shown in the sidebar
pub static DEFAULT_CAPACITIES: LazyLock<Vec<(&'static str, u32)>> = LazyLock::new(|| {
    vec![
        ("Fresno", 5000),
        ("SLC", 100),
        ("Olathe", 150),
        ("Indy", 2000),
        ("Hamburg", 300),
        ("Macon", 800),
        ("Charlotte", 10),
    ]
});

/// Capacity used for centers without a configured default
pub const FALLBACK_CAPACITY: u32 = 100;

/// Default customer SLA in days
pub const DEFAULT_SLA_DAYS: u32 = 2;

/// Default capacity for a center name
pub fn default_capacity(name: &str) -> u32 {
    DEFAULT_CAPACITIES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or(FALLBACK_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let names: Vec<&str> = DEFAULT_CENTERS.names().collect();
        assert_eq!(
            names,
            vec!["Fresno", "SLC", "Olathe", "Indy", "Hamburg", "Macon", "Charlotte"]
        );
    }

    #[test]
    fn test_default_capacity_lookup() {
        assert_eq!(default_capacity("Indy"), 2000);
        assert_eq!(default_capacity("Somewhere"), FALLBACK_CAPACITY);
    }
}
