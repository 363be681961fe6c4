//! Display color name to egui color mapping

use eframe::egui::Color32;

/// Resolve a display color name to a widget color.
///
/// Unknown names fall back to dark gray rather than failing: zone input data
/// may carry arbitrary color names, and only center names are validated.
pub fn color32(name: &str) -> Color32 {
    match name {
        "red" => Color32::from_rgb(214, 39, 40),
        "blue" => Color32::from_rgb(31, 119, 180),
        "green" => Color32::from_rgb(44, 160, 44),
        "purple" => Color32::from_rgb(148, 103, 189),
        "orange" => Color32::from_rgb(255, 127, 14),
        "pink" => Color32::from_rgb(227, 119, 194),
        "gray" | "grey" => Color32::from_rgb(127, 127, 127),
        "yellow" => Color32::from_rgb(188, 189, 34),
        "brown" => Color32::from_rgb(140, 86, 75),
        "black" => Color32::BLACK,
        _ => Color32::DARK_GRAY,
    }
}

/// Same color at half opacity, matching the map's translucent zone fill
pub fn color32_translucent(name: &str) -> Color32 {
    let c = color32(name);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 128)
}

/// Background highlight for rows diverging from the computed optimum
pub const FLAGGED_ROW_BG: Color32 = Color32::from_rgb(0xFF, 0xCC, 0xCB);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_names() {
        assert_eq!(color32("red"), Color32::from_rgb(214, 39, 40));
        assert_eq!(color32("grey"), color32("gray"));
        assert_eq!(color32("no-such-color"), Color32::DARK_GRAY);
    }

    #[test]
    fn test_translucent_alpha() {
        assert_eq!(color32_translucent("blue").a(), 128);
    }
}
