//! Assignment grid panel: editable user DC column with divergence highlight

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use routeopt_app::Session;

use crate::colors::FLAGGED_ROW_BG;

/// Panel rendering the assignment table.
///
/// Only the "User Input DC" column is editable; every other cell is displayed
/// read-only. Edits are routed through `Session::apply_edits`, so the stored
/// table stays the single source of truth for both this grid and the map.
pub struct GridPanel;

impl GridPanel {
    pub fn new() -> Self {
        Self
    }

    /// Render the grid. Returns a status message when an edit was processed.
    pub fn ui(&mut self, ui: &mut Ui, session: &mut Session) -> Option<(String, bool)> {
        ui.heading("Optimal DC");
        ui.add_space(4.0);

        let rows = session.grid_rows();
        if rows.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label(
                    RichText::new("No assignment yet - press Optimize").color(Color32::GRAY),
                );
            });
            return None;
        }

        let center_names: Vec<String> =
            session.catalog().names().map(|n| n.to_string()).collect();
        let mut pending_edit: Option<(String, String)> = None;

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(140.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(130.0))
            .column(Column::auto().at_least(100.0))
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Zone Name");
                });
                header.col(|ui| {
                    ui.strong("Current DC");
                });
                header.col(|ui| {
                    ui.strong("Optimal DC");
                });
                header.col(|ui| {
                    ui.strong("User Input DC");
                });
                header.col(|ui| {
                    ui.strong("Order Volume");
                });
            })
            .body(|mut body| {
                for row in &rows {
                    body.row(26.0, |mut table_row| {
                        let flagged = row.flagged;
                        table_row.col(|ui| {
                            flag_background(ui, flagged);
                            ui.label(&row.zone);
                        });
                        table_row.col(|ui| {
                            flag_background(ui, flagged);
                            ui.label(row.current_dc.as_deref().unwrap_or("-"));
                        });
                        table_row.col(|ui| {
                            flag_background(ui, flagged);
                            ui.label(&row.optimal_dc);
                        });
                        table_row.col(|ui| {
                            flag_background(ui, flagged);
                            let mut selected = row.user_input_dc.clone();
                            egui::ComboBox::from_id_salt(("user_dc", &row.zone))
                                .selected_text(selected.clone())
                                .show_ui(ui, |ui| {
                                    for name in &center_names {
                                        ui.selectable_value(&mut selected, name.clone(), name);
                                    }
                                });
                            if selected != row.user_input_dc {
                                pending_edit = Some((row.zone.clone(), selected));
                            }
                        });
                        table_row.col(|ui| {
                            flag_background(ui, flagged);
                            match row.order_volume {
                                Some(v) => ui.label(format!("{:.1}", v)),
                                None => ui.label("-"),
                            };
                        });
                    });
                }
            });

        let (zone, new_dc) = pending_edit?;
        Some(self.commit_edit(session, &zone, &new_dc))
    }

    /// Build the edited table for a single cell change and reconcile it
    fn commit_edit(&self, session: &mut Session, zone: &str, new_dc: &str) -> (String, bool) {
        let Some(current) = session.table() else {
            return ("No assignment to edit".to_string(), true);
        };
        let mut edited = current.clone();
        if let Some(row) = edited.rows.iter_mut().find(|r| r.zone.name == zone) {
            row.user_input_dc = new_dc.to_string();
        }
        match session.apply_edits(&edited) {
            Ok(true) => (format!("{} assigned to {}", zone, new_dc), false),
            Ok(false) => ("No change".to_string(), false),
            Err(e) => (format!("Edit rejected: {}", e), true),
        }
    }
}

/// Paint the divergence highlight behind a cell
fn flag_background(ui: &mut Ui, flagged: bool) {
    if flagged {
        let rect = ui.available_rect_before_wrap().expand2(egui::vec2(2.0, 3.0));
        ui.painter().rect_filled(rect, 0.0, FLAGGED_ROW_BG);
    }
}
