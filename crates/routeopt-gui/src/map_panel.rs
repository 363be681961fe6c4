//! Map panel: projected circle markers for centers and zones

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use routeopt_app::Session;
use routeopt_types::MapMarker;

use crate::colors::{color32, color32_translucent};

/// Screen pixels per unit of marker radius
const MARKER_SCALE: f32 = 0.5;
/// Fraction of the panel kept as margin around the marker bounding box
const MARGIN: f64 = 0.06;

/// Panel rendering the marker view of the current session state
pub struct MapPanel {
    /// Fallback viewport center when there are no markers to frame
    home: (f64, f64),
}

impl MapPanel {
    pub fn new(home: (f64, f64)) -> Self {
        Self { home }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &Session) {
        let markers = session.map_markers();

        let desired = Vec2::new(ui.available_width(), ui.available_height());
        let (response, painter) = ui.allocate_painter(desired, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, Color32::from_gray(245));

        let bounds = Bounds::framing(&markers, self.home);
        // Centers come first in the marker list, in catalog order
        let center_count = session.catalog().len();
        for (i, marker) in markers.iter().enumerate() {
            let pos = bounds.project(marker.lat, marker.lng, rect);
            let radius = marker.radius * MARKER_SCALE;
            if i < center_count {
                painter.circle(
                    pos,
                    radius,
                    color32(&marker.color),
                    Stroke::new(2.0, Color32::BLACK),
                );
            } else {
                painter.circle_filled(pos, radius, color32_translucent(&marker.color));
            }
        }

        // Tooltip for the marker under the pointer, nearest-first
        if let Some(pointer) = response.hover_pos() {
            let hovered = markers
                .iter()
                .map(|m| (m, bounds.project(m.lat, m.lng, rect).distance(pointer)))
                .filter(|(m, d)| *d <= m.radius * MARKER_SCALE)
                .min_by(|(_, a), (_, b)| a.total_cmp(b));
            if let Some((marker, _)) = hovered {
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    response.layer_id,
                    response.id.with("marker_tooltip"),
                    |ui| {
                        ui.label(&marker.name);
                    },
                );
            }
        }
    }
}

/// Geographic bounding box mapped onto the panel rect (equirectangular)
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Bounds {
    fn framing(markers: &[MapMarker], home: (f64, f64)) -> Self {
        if markers.is_empty() {
            // Arbitrary one-degree window around the configured home point
            return Self {
                min_lat: home.0 - 0.5,
                max_lat: home.0 + 0.5,
                min_lng: home.1 - 0.5,
                max_lng: home.1 + 0.5,
            };
        }
        let mut bounds = Self {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lng: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
        };
        for m in markers {
            bounds.min_lat = bounds.min_lat.min(m.lat);
            bounds.max_lat = bounds.max_lat.max(m.lat);
            bounds.min_lng = bounds.min_lng.min(m.lng);
            bounds.max_lng = bounds.max_lng.max(m.lng);
        }
        // Pad so edge markers are not clipped; also handles the
        // degenerate single-point box
        let lat_span = (bounds.max_lat - bounds.min_lat).max(0.1);
        let lng_span = (bounds.max_lng - bounds.min_lng).max(0.1);
        bounds.min_lat -= lat_span * MARGIN;
        bounds.max_lat += lat_span * MARGIN;
        bounds.min_lng -= lng_span * MARGIN;
        bounds.max_lng += lng_span * MARGIN;
        bounds
    }

    fn project(&self, lat: f64, lng: f64, rect: Rect) -> Pos2 {
        let x = (lng - self.min_lng) / (self.max_lng - self.min_lng);
        // Latitude grows north, screen y grows down
        let y = 1.0 - (lat - self.min_lat) / (self.max_lat - self.min_lat);
        Pos2::new(
            rect.left() + (x as f32) * rect.width(),
            rect.top() + (y as f32) * rect.height(),
        )
    }
}
