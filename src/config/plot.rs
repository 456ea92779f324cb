//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub trend_line_color: Color32,
    pub daily_line_color: Color32,
    pub snap_line_color: Color32,
    /// Outline drawn behind every marker
    pub marker_outline_color: Color32,
    // Per-year marker colors are sampled from this gradient (oldest year first)
    pub year_gradient_colors: &'static [&'static str],
    pub trend_line_width: f32,
    pub daily_line_width: f32,
    pub marker_radius: f32,
    pub marker_outline_radius: f32,
    /// Plot aspect ratio (width:height) of the main trend chart
    pub trend_aspect_ratio: f32,
    /// Fixed height of each zoom window chart
    pub window_plot_height: f32,
    /// Fraction of the price span added above and below the data
    pub y_padding_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    trend_line_color: Color32::from_rgb(64, 158, 218),
    daily_line_color: Color32::from_rgb(64, 158, 218),
    snap_line_color: Color32::GRAY,
    marker_outline_color: Color32::BLACK,
    year_gradient_colors: &[
        "#ffb703", // Amber
        "#ff8c00", // Dark orange
        "#ff4500", // Orange red
        "#b22222", // Firebrick
    ],
    trend_line_width: 2.0,
    daily_line_width: 1.5,
    marker_radius: 7.0,
    marker_outline_radius: 8.5,
    trend_aspect_ratio: 2.5,
    window_plot_height: 260.0,
    y_padding_pct: 0.08,
};
