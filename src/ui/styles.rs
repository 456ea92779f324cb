use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for captions and notes).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair. The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a percentage, green for gains, red for losses, gray when missing.
    fn label_pct(&mut self, value: Option<f64>);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);
}

/// Gain / loss / missing color for a percentage.
pub fn pct_color(value: Option<f64>) -> Color32 {
    match value {
        Some(v) if v > 0.0 => UI_CONFIG.colors.gain,
        Some(v) if v < 0.0 => UI_CONFIG.colors.loss,
        Some(_) => UI_CONFIG.colors.label,
        None => UI_CONFIG.colors.unavailable,
    }
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(format!("{}:", label)).color(Color32::GRAY));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_pct(&mut self, value: Option<f64>) {
        let text = match value {
            Some(v) => format!("{:.2}", v),
            None => UI_TEXT.unavailable.to_string(),
        };
        self.label(RichText::new(text).monospace().color(pct_color(value)));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.loss));
    }
}
