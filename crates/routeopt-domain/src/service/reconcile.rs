//! Reconciliation of user edits against the stored assignment table

use routeopt_types::{Error, Result};

use crate::model::{AssignmentTable, CenterCatalog};

/// Merge an edited table returned by the grid back into the stored one.
///
/// Only `user_input_dc` is accepted from the edited table; `user_color` is
/// recomputed from the catalog and every other cell is copied from `current`.
/// Rows absent from the edited table are kept as-is (editing surfaces may
/// hand back filtered views). The returned flag is true iff the reconciled
/// table differs from `current` by full value comparison, so applying the
/// same edit twice reports no change the second time.
///
/// An edit naming an unknown center fails with `UnknownCenter` and nothing is
/// applied: the caller keeps its previous table.
pub fn apply_user_edits(
    current: &AssignmentTable,
    edited: &AssignmentTable,
    catalog: &CenterCatalog,
) -> Result<(AssignmentTable, bool)> {
    let mut rows = Vec::with_capacity(current.rows.len());
    for row in &current.rows {
        let mut merged = row.clone();
        if let Some(edit) = edited.get(&row.zone.name) {
            let color = catalog.color_of(&edit.user_input_dc).ok_or_else(|| {
                Error::UnknownCenter {
                    zone: row.zone.name.clone(),
                    center: edit.user_input_dc.clone(),
                }
            })?;
            merged.user_input_dc = edit.user_input_dc.clone();
            merged.user_color = color.to_string();
        }
        rows.push(merged);
    }
    let reconciled = AssignmentTable { rows };
    let changed = reconciled != *current;
    Ok((reconciled, changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DistributionCenter, Zone};
    use crate::service::assignment::compute_assignment;

    fn catalog() -> CenterCatalog {
        CenterCatalog::new(vec![
            DistributionCenter::new("A", 0.0, 0.0, "red"),
            DistributionCenter::new("B", 10.0, 0.0, "blue"),
        ])
        .unwrap()
    }

    fn base_table(catalog: &CenterCatalog) -> AssignmentTable {
        let zones = vec![
            Zone::new("Zone1", 4.0, 0.0, "gray"),
            Zone::new("Zone2", 6.0, 0.0, "gray"),
        ];
        compute_assignment(&zones, catalog).unwrap()
    }

    #[test]
    fn test_identity_edit_reports_no_change() {
        let catalog = catalog();
        let table = base_table(&catalog);
        let (reconciled, changed) = apply_user_edits(&table, &table, &catalog).unwrap();
        assert!(!changed);
        assert_eq!(reconciled, table);
    }

    #[test]
    fn test_valid_override_applied() {
        let catalog = catalog();
        let table = base_table(&catalog);

        let mut edited = table.clone();
        edited.rows[0].user_input_dc = "B".to_string();

        let (reconciled, changed) = apply_user_edits(&table, &edited, &catalog).unwrap();
        assert!(changed);
        let row = reconciled.get("Zone1").unwrap();
        assert_eq!(row.user_input_dc, "B");
        assert_eq!(row.user_color, "blue");
        assert!(row.is_diverged());
        // The optimum never moves
        assert_eq!(row.optimal_dc, "A");
        assert_eq!(row.optimal_color, "red");
        // Untouched rows stay untouched
        assert_eq!(reconciled.get("Zone2"), table.get("Zone2"));
    }

    #[test]
    fn test_second_application_is_idempotent() {
        let catalog = catalog();
        let table = base_table(&catalog);

        let mut edited = table.clone();
        edited.rows[0].user_input_dc = "B".to_string();

        let (reconciled, changed) = apply_user_edits(&table, &edited, &catalog).unwrap();
        assert!(changed);
        let (again, changed) = apply_user_edits(&reconciled, &edited, &catalog).unwrap();
        assert!(!changed);
        assert_eq!(again, reconciled);
    }

    #[test]
    fn test_stale_user_color_is_recomputed() {
        let catalog = catalog();
        let table = base_table(&catalog);

        // The editing surface only writes the name column; a stale color must
        // not survive reconciliation.
        let mut edited = table.clone();
        edited.rows[1].user_input_dc = "A".to_string();
        edited.rows[1].user_color = "chartreuse".to_string();

        let (reconciled, changed) = apply_user_edits(&table, &edited, &catalog).unwrap();
        assert!(changed);
        assert_eq!(reconciled.get("Zone2").unwrap().user_color, "red");
    }

    #[test]
    fn test_unknown_center_rejects_whole_edit() {
        let catalog = catalog();
        let table = base_table(&catalog);

        let mut edited = table.clone();
        edited.rows[0].user_input_dc = "B".to_string();
        edited.rows[1].user_input_dc = "Nowhere".to_string();

        let result = apply_user_edits(&table, &edited, &catalog);
        assert!(matches!(
            result,
            Err(Error::UnknownCenter { ref zone, ref center })
                if zone == "Zone2" && center == "Nowhere"
        ));
    }

    #[test]
    fn test_rows_missing_from_edit_are_kept() {
        let catalog = catalog();
        let table = base_table(&catalog);

        let edited = AssignmentTable {
            rows: vec![table.rows[1].clone()],
        };
        let (reconciled, changed) = apply_user_edits(&table, &edited, &catalog).unwrap();
        assert!(!changed);
        assert_eq!(reconciled, table);
    }

    #[test]
    fn test_optimal_never_mutated_by_edits() {
        let catalog = catalog();
        let table = base_table(&catalog);

        let mut edited = table.clone();
        for row in &mut edited.rows {
            row.user_input_dc = "B".to_string();
            row.optimal_dc = "B".to_string();
            row.optimal_color = "blue".to_string();
        }

        let (reconciled, _) = apply_user_edits(&table, &edited, &catalog).unwrap();
        for (before, after) in table.rows.iter().zip(&reconciled.rows) {
            assert_eq!(before.optimal_dc, after.optimal_dc);
            assert_eq!(before.optimal_color, after.optimal_color);
        }
    }
}
