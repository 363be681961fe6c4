//! GUI entry point for the routeopt dashboard

mod app;
mod colors;
mod grid_panel;
mod map_panel;

use app::RouteOptApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "S2P Route Optimization",
        options,
        Box::new(|cc| Ok(Box::new(RouteOptApp::new(cc)))),
    )
}
