//! Main application structure: sidebar controls, map, assignment grid

use chrono::Local;
use eframe::egui::{self, Color32, DragValue, RichText};

use routeopt_app::constants::DEFAULT_CENTERS;
use routeopt_app::export::export_assignment;
use routeopt_app::{Config, Session};
use routeopt_infra::{load_catalog, load_zones};

use crate::colors::color32;
use crate::grid_panel::GridPanel;
use crate::map_panel::MapPanel;

/// Main application state
pub struct RouteOptApp {
    /// Session-scoped assignment state, threaded into every panel
    session: Session,
    /// Application configuration
    config: Config,
    map_panel: MapPanel,
    grid_panel: GridPanel,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl RouteOptApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Configure style for better responsiveness
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.3;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_default();

        let catalog = match &config.centers_file {
            Some(path) => load_catalog(path).unwrap_or_else(|e| {
                eprintln!("Warning: failed to load {}: {}", path.display(), e);
                DEFAULT_CENTERS.clone()
            }),
            None => DEFAULT_CENTERS.clone(),
        };

        let mut status_message = None;
        let zones = match &config.zones_csv {
            Some(path) => match load_zones(path) {
                Ok(zones) => {
                    status_message =
                        Some((format!("Loaded {} zones from {}", zones.len(), path.display()), false));
                    zones
                }
                Err(e) => {
                    status_message = Some((format!("Failed to load zones: {}", e), true));
                    Vec::new()
                }
            },
            None => {
                status_message =
                    Some(("Load a zones CSV to begin".to_string(), false));
                Vec::new()
            }
        };

        let map_home = (config.map_center_lat, config.map_center_lng);
        Self {
            session: Session::new(catalog, zones),
            config,
            map_panel: MapPanel::new(map_home),
            grid_panel: GridPanel::new(),
            status_message,
        }
    }

    fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("DC Capacities");
        ui.add_space(6.0);
        for (name, capacity) in self.session.capacities_mut() {
            ui.horizontal(|ui| {
                ui.label(format!("{:<10}", name));
                ui.add(DragValue::new(capacity).range(0..=100_000));
            });
        }

        ui.add_space(10.0);
        ui.separator();
        ui.heading("Customer SLA (Days)");
        let mut sla = self.session.sla_days();
        if ui.add(DragValue::new(&mut sla).range(1..=30)).changed() {
            self.session.set_sla_days(sla);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);

        if ui.button("Optimize").clicked() {
            self.optimize();
        }
        if ui.button("Load zones CSV...").clicked() {
            self.load_zones_dialog();
        }
        let can_export = self.session.is_optimized();
        if ui
            .add_enabled(can_export, egui::Button::new("Export Excel..."))
            .clicked()
        {
            self.export_dialog();
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label(format!("Zones loaded: {}", self.session.zones().len()));
        if let Some(at) = self.session.optimized_at() {
            ui.label(format!("Optimized: {}", at.format("%H:%M:%S")));
        }

        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(10.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    }

    fn optimize(&mut self) {
        if self.session.zones().is_empty() {
            self.status_message = Some(("No zones loaded".to_string(), true));
            return;
        }
        match self.session.optimize() {
            Ok(()) => {
                self.status_message = Some((
                    format!("Assigned {} zones", self.session.zones().len()),
                    false,
                ));
            }
            Err(e) => {
                self.status_message = Some((format!("Optimize failed: {}", e), true));
            }
        }
    }

    fn load_zones_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        else {
            return;
        };
        match load_zones(&path) {
            Ok(zones) => {
                self.status_message =
                    Some((format!("Loaded {} zones from {}", zones.len(), path.display()), false));
                self.session.set_zones(zones);
                self.config.zones_csv = Some(path);
                if let Err(e) = self.config.save() {
                    eprintln!("Warning: failed to save config: {}", e);
                }
            }
            Err(e) => {
                self.status_message = Some((format!("Failed to load zones: {}", e), true));
            }
        }
    }

    fn export_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel", &["xlsx"])
            .set_file_name("assignment.xlsx")
            .save_file()
        else {
            return;
        };
        let Some(table) = self.session.table() else {
            return;
        };
        match export_assignment(table, self.session.catalog(), Local::now(), &path) {
            Ok(()) => {
                self.status_message =
                    Some((format!("Exported to {}", path.display()), false));
            }
            Err(e) => {
                self.status_message = Some((format!("Export failed: {}", e), true));
            }
        }
    }

    fn legend(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for center in self.session.catalog().centers() {
                ui.label(RichText::new("\u{25CF}").color(color32(&center.color)));
                ui.label(&center.name);
                ui.add_space(8.0);
            }
        });
    }
}

impl eframe::App for RouteOptApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .default_width(230.0)
            .show(ctx, |ui| {
                self.sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let map_height = ui.available_height() * 0.55;
            ui.allocate_ui(egui::vec2(ui.available_width(), map_height), |ui| {
                ui.set_min_size(egui::vec2(ui.available_width(), map_height));
                self.map_panel.ui(ui, &self.session);
            });
            self.legend(ui);
            ui.separator();

            if let Some(status) = self.grid_panel.ui(ui, &mut self.session) {
                self.status_message = Some(status);
            }
        });
    }
}
