//! Excel export of the assignment table

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use routeopt_domain::model::{AssignmentTable, CenterCatalog};
use routeopt_domain::service::grid_rows;
use routeopt_types::{Error, Result};

/// Export the assignment table to an Excel workbook
pub fn export_assignment(
    table: &AssignmentTable,
    catalog: &CenterCatalog,
    exported_at: DateTime<Local>,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, table, catalog, exported_at)?;

    let assignments_sheet = workbook.add_worksheet();
    write_assignments_sheet(assignments_sheet, table)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    table: &AssignmentTable,
    catalog: &CenterCatalog,
    exported_at: DateTime<Local>,
) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "DC Assignment Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Exported:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, &exported_at.to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Zones:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, table.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "User overrides:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, table.diverged_count() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string_with_format(6, 0, "Zones per DC", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut row = 7;
    for center in catalog.centers() {
        sheet
            .write_string(row, 0, &center.name)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, table.assigned_count(&center.name) as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    Ok(())
}

fn write_assignments_sheet(sheet: &mut Worksheet, table: &AssignmentTable) -> Result<()> {
    sheet
        .set_name("Assignments")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Zone",
        "Lat",
        "Lng",
        "Current DC",
        "Optimal DC",
        "User Input DC",
        "Order Volume",
        "Diverged",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (i, row) in grid_rows(table).iter().enumerate() {
        let r = (i + 1) as u32;
        sheet
            .write_string(r, 0, &row.zone)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(r, 1, row.lat)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(r, 2, row.lng)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(r, 3, row.current_dc.as_deref().unwrap_or("-"))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(r, 4, &row.optimal_dc)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(r, 5, &row.user_input_dc)
            .map_err(|e| Error::Excel(e.to_string()))?;
        if let Some(volume) = row.order_volume {
            sheet
                .write_number(r, 6, volume)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_string(r, 7, if row.flagged { "Yes" } else { "No" })
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeopt_domain::model::{DistributionCenter, Zone};
    use routeopt_domain::service::compute_assignment;

    #[test]
    fn test_export_writes_workbook() {
        let catalog = CenterCatalog::new(vec![
            DistributionCenter::new("A", 0.0, 0.0, "red"),
            DistributionCenter::new("B", 10.0, 0.0, "blue"),
        ])
        .unwrap();
        let zones = vec![Zone::new("Zone1", 4.0, 0.0, "green")];
        let table = compute_assignment(&zones, &catalog).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignment.xlsx");
        export_assignment(&table, &catalog, Local::now(), &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
