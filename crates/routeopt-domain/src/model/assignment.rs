//! Enriched assignment table

use serde::{Deserialize, Serialize};

use crate::model::Zone;

/// One zone row enriched with its computed and user-selected centers.
///
/// `optimal_dc` and `optimal_color` are derived once per computation and never
/// change afterwards; `user_input_dc` (with its dependent `user_color`) is the
/// only user-mutable cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub zone: Zone,
    pub optimal_dc: String,
    pub optimal_color: String,
    pub user_input_dc: String,
    pub user_color: String,
}

impl AssignmentRow {
    /// True when the user selection diverges from the computed optimum
    pub fn is_diverged(&self) -> bool {
        self.user_input_dc != self.optimal_dc
    }
}

/// The enriched zone table, single source of truth for the map and the grid.
///
/// Row identity is the zone name; row order follows the input zone order.
/// Equality compares every cell, which is the change-detection test used to
/// decide whether the views need a refresh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignmentTable {
    pub rows: Vec<AssignmentRow>,
}

impl AssignmentTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row by zone name
    pub fn get(&self, zone_name: &str) -> Option<&AssignmentRow> {
        self.rows.iter().find(|r| r.zone.name == zone_name)
    }

    /// Number of rows whose user selection diverges from the optimum
    pub fn diverged_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_diverged()).count()
    }

    /// Number of rows whose user selection is the given center
    pub fn assigned_count(&self, center_name: &str) -> usize {
        self.rows
            .iter()
            .filter(|r| r.user_input_dc == center_name)
            .count()
    }
}
