use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub gain: Color32,
    pub loss: Color32,
    pub unavailable: Color32,
    pub callout_fill: Color32,
    pub callout_accent: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub table_min_col_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(28, 30, 36),
        side_panel: Color32::from_rgb(20, 20, 24),
        gain: Color32::from_rgb(130, 200, 140),
        loss: Color32::from_rgb(230, 110, 110),
        unavailable: Color32::from_gray(140),
        callout_fill: Color32::from_rgb(36, 40, 48),
        callout_accent: Color32::from_rgb(64, 158, 218),
    },
    table_min_col_width: 90.0,
};
