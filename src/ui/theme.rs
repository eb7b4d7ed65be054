// TimeLog Viewer - ui/theme.rs
//
// Colour scheme, visuals setup, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Bar fill for the hours-by-employee chart.
pub const EMPLOYEE_BAR: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600

/// Bar fill for the hours-by-project chart.
pub const PROJECT_BAR: Color32 = Color32::from_rgb(5, 150, 105); // Emerald 600

/// Failure text in the status bar and the skipped-entries list.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Warning text (skipped entries, config warnings).
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Track behind each bar, so short bars still read as part of a scale.
pub fn bar_track_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(55, 65, 81) // Gray 700
    } else {
        Color32::from_rgb(229, 231, 235) // Gray 200
    }
}

/// Apply light/dark visuals and the configured body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
            if let Some(font) = style.text_styles.get_mut(&text_style) {
                font.size = font_size;
            }
        }
    });
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const CHART_LABEL_WIDTH: f32 = 140.0;
pub const CHART_VALUE_WIDTH: f32 = 60.0;
pub const BAR_HEIGHT: f32 = 18.0;
pub const BAR_SPACING: f32 = 6.0;
