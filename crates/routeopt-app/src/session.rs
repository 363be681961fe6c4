//! Session state: the enriched table and its update discipline

use chrono::{DateTime, Local};

use routeopt_domain::model::{AssignmentTable, CenterCatalog, Zone};
use routeopt_domain::service::{apply_user_edits, compute_assignment, grid_rows, map_markers};
use routeopt_types::{GridRow, MapMarker, Result};

use crate::constants::{default_capacity, DEFAULT_SLA_DAYS};

/// Per-session state, threaded explicitly through the hosting surface.
///
/// Owns the center catalog, the loaded zones, and the current assignment
/// table. Every interaction is one synchronous unit of work: read the stored
/// table, compute a replacement, swap it in only on success.
pub struct Session {
    catalog: CenterCatalog,
    zones: Vec<Zone>,
    /// Per-center capacity figures, catalog order. Planning inputs shown in
    /// the sidebar; not consumed by the assignment computation.
    capacities: Vec<(String, u32)>,
    /// Customer SLA in days, same status as capacities
    sla_days: u32,
    table: Option<AssignmentTable>,
    optimized_at: Option<DateTime<Local>>,
}

impl Session {
    pub fn new(catalog: CenterCatalog, zones: Vec<Zone>) -> Self {
        let capacities = catalog
            .names()
            .map(|name| (name.to_string(), default_capacity(name)))
            .collect();
        Self {
            catalog,
            zones,
            capacities,
            sla_days: DEFAULT_SLA_DAYS,
            table: None,
            optimized_at: None,
        }
    }

    pub fn catalog(&self) -> &CenterCatalog {
        &self.catalog
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Replace the zone dataset. Any existing assignment belongs to the old
    /// dataset and is discarded.
    pub fn set_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
        self.table = None;
        self.optimized_at = None;
    }

    pub fn table(&self) -> Option<&AssignmentTable> {
        self.table.as_ref()
    }

    pub fn is_optimized(&self) -> bool {
        self.table.is_some()
    }

    pub fn optimized_at(&self) -> Option<DateTime<Local>> {
        self.optimized_at
    }

    pub fn capacities(&self) -> &[(String, u32)] {
        &self.capacities
    }

    pub fn set_capacity(&mut self, center_name: &str, capacity: u32) {
        if let Some(entry) = self.capacities.iter_mut().find(|(n, _)| n == center_name) {
            entry.1 = capacity;
        }
    }

    pub fn capacities_mut(&mut self) -> &mut [(String, u32)] {
        &mut self.capacities
    }

    pub fn sla_days(&self) -> u32 {
        self.sla_days
    }

    pub fn set_sla_days(&mut self, days: u32) {
        self.sla_days = days;
    }

    /// Compute the optimal assignment and store it.
    ///
    /// The only transition from "no assignment yet" to "assignment exists".
    pub fn optimize(&mut self) -> Result<()> {
        let table = compute_assignment(&self.zones, &self.catalog)?;
        self.table = Some(table);
        self.optimized_at = Some(Local::now());
        Ok(())
    }

    /// Reconcile an edited table from the grid against the stored one.
    ///
    /// On success the stored table is replaced and the returned flag says
    /// whether anything actually changed (i.e. the views need a refresh).
    /// On failure the stored table is left untouched. A no-op before the
    /// first optimize.
    pub fn apply_edits(&mut self, edited: &AssignmentTable) -> Result<bool> {
        let Some(current) = self.table.as_ref() else {
            return Ok(false);
        };
        let (reconciled, changed) = apply_user_edits(current, edited, &self.catalog)?;
        self.table = Some(reconciled);
        Ok(changed)
    }

    pub fn map_markers(&self) -> Vec<MapMarker> {
        map_markers(&self.zones, self.table.as_ref(), &self.catalog)
    }

    /// Grid rows for the current table; empty before the first optimize
    pub fn grid_rows(&self) -> Vec<GridRow> {
        self.table.as_ref().map(grid_rows).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeopt_domain::model::DistributionCenter;
    use routeopt_types::Error;

    fn session() -> Session {
        let catalog = CenterCatalog::new(vec![
            DistributionCenter::new("A", 0.0, 0.0, "red"),
            DistributionCenter::new("B", 10.0, 0.0, "blue"),
        ])
        .unwrap();
        let zones = vec![
            Zone::new("Zone1", 4.0, 0.0, "green"),
            Zone::new("Zone2", 6.0, 0.0, "green"),
        ];
        Session::new(catalog, zones)
    }

    #[test]
    fn test_optimize_creates_table() {
        let mut session = session();
        assert!(!session.is_optimized());
        assert!(session.grid_rows().is_empty());

        session.optimize().unwrap();
        assert!(session.is_optimized());
        assert!(session.optimized_at().is_some());
        assert_eq!(session.grid_rows().len(), 2);
        assert_eq!(session.table().unwrap().get("Zone1").unwrap().optimal_dc, "A");
    }

    #[test]
    fn test_apply_edits_before_optimize_is_noop() {
        let mut session = session();
        let changed = session.apply_edits(&AssignmentTable::default()).unwrap();
        assert!(!changed);
        assert!(!session.is_optimized());
    }

    #[test]
    fn test_apply_edits_swaps_table() {
        let mut session = session();
        session.optimize().unwrap();

        let mut edited = session.table().unwrap().clone();
        edited.rows[0].user_input_dc = "B".to_string();

        let changed = session.apply_edits(&edited).unwrap();
        assert!(changed);
        let row = session.table().unwrap().get("Zone1").unwrap();
        assert_eq!(row.user_input_dc, "B");
        assert!(row.is_diverged());

        // Same edit again: no change signalled
        let changed = session.apply_edits(&edited).unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_invalid_edit_leaves_table_untouched() {
        let mut session = session();
        session.optimize().unwrap();
        let before = session.table().unwrap().clone();

        let mut edited = before.clone();
        edited.rows[0].user_input_dc = "Nowhere".to_string();

        let result = session.apply_edits(&edited);
        assert!(matches!(result, Err(Error::UnknownCenter { .. })));
        assert_eq!(session.table().unwrap(), &before);
    }

    #[test]
    fn test_set_zones_discards_assignment() {
        let mut session = session();
        session.optimize().unwrap();
        session.set_zones(vec![Zone::new("Zone9", 1.0, 1.0, "green")]);
        assert!(!session.is_optimized());
        assert!(session.optimized_at().is_none());
        assert_eq!(session.zones().len(), 1);
    }

    #[test]
    fn test_markers_follow_assignment_state() {
        let mut session = session();
        // 2 centers + 2 zones
        assert_eq!(session.map_markers().len(), 4);
        let before = session.map_markers();
        assert_eq!(before[2].color, "green");

        session.optimize().unwrap();
        let after = session.map_markers();
        assert_eq!(after[2].color, "red");
    }

    #[test]
    fn test_capacity_and_sla_inputs() {
        let mut session = session();
        session.set_capacity("A", 777);
        session.set_sla_days(5);
        assert_eq!(session.capacities()[0], ("A".to_string(), 777));
        assert_eq!(session.sla_days(), 5);
        // Unknown names are ignored
        session.set_capacity("Nowhere", 1);
        assert_eq!(session.capacities().len(), 2);
    }
}
