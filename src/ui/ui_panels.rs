use eframe::egui::{Frame, Grid, Margin, RichText, Stroke, Ui};

use crate::analysis::{AnalysisError, HoldingPeriodReturn, YearEndRow};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, pct_color};
use crate::ui::utils::{format_pct, format_price, section_heading};
use crate::utils::TimeUtils;

/// Trait for read-only sections that render from borrowed model data
pub trait Panel {
    fn render(&self, ui: &mut Ui);
}

/// Headline return figures for the holding period
pub struct ReturnSummaryPanel<'a> {
    pub returns: &'a Result<HoldingPeriodReturn, AnalysisError>,
}

impl Panel for ReturnSummaryPanel<'_> {
    fn render(&self, ui: &mut Ui) {
        let hpr = match self.returns {
            Ok(hpr) => hpr,
            Err(e) => {
                section_heading(ui, UI_TEXT.returns_heading);
                ui.label_error(format!("{}: {}", UI_TEXT.unavailable, e));
                return;
            }
        };
        let s = &hpr.summary;

        section_heading(ui, format!("{} ({} years)", UI_TEXT.returns_heading, s.years));
        ui.metric(
            UI_TEXT.returns_start,
            &format!("{} ({})", format_price(hpr.start.close), TimeUtils::format(hpr.start.date)),
            UI_CONFIG.colors.label,
        );
        ui.metric(
            UI_TEXT.returns_end,
            &format!("{} ({})", format_price(hpr.end.close), TimeUtils::format(hpr.end.date)),
            UI_CONFIG.colors.label,
        );
        for (label, value) in [
            (UI_TEXT.returns_total, s.total_return_pct),
            (UI_TEXT.returns_simple, s.simple_average_pct),
            (UI_TEXT.returns_cagr, s.cagr_pct),
        ] {
            ui.metric(label, &format!("{:.2}%", value), pct_color(Some(value)));
        }
    }
}

/// Year-end close / previous close / YoY table
pub struct YearEndTablePanel<'a> {
    pub rows: &'a [YearEndRow],
}

impl Panel for YearEndTablePanel<'_> {
    fn render(&self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.yoy_heading);
        if self.rows.is_empty() {
            ui.label_subdued(UI_TEXT.unavailable);
            return;
        }

        Grid::new("year_end_table")
            .striped(true)
            .min_col_width(UI_CONFIG.table_min_col_width)
            .show(ui, |ui| {
                for column in UI_TEXT.yoy_columns {
                    ui.label_subheader(column);
                }
                ui.end_row();

                for row in self.rows {
                    ui.label(row.year.to_string());
                    ui.label(RichText::new(format!("{:.2}", row.close_ye)).monospace());
                    ui.label(
                        RichText::new(
                            row.prev_close_ye
                                .map(|p| format!("{:.2}", p))
                                .unwrap_or_else(|| UI_TEXT.unavailable.to_string()),
                        )
                        .monospace(),
                    );
                    ui.label_pct(row.yoy_pct);
                    ui.end_row();
                }
            });
    }
}

/// Prev/next-day moves for one zoom window, as a compact line above its chart
pub struct WindowDeltaPanel {
    pub prev_pct: Option<f64>,
    pub next_pct: Option<f64>,
}

impl Panel for WindowDeltaPanel {
    fn render(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.metric(UI_TEXT.window_prev, &format_pct(self.prev_pct), pct_color(self.prev_pct));
            ui.add_space(12.0);
            ui.metric(UI_TEXT.window_next, &format_pct(self.next_pct), pct_color(self.next_pct));
        });
    }
}

/// Static commentary: earnings reactions and key price drivers
pub struct CommentaryPanel;

impl Panel for CommentaryPanel {
    fn render(&self, ui: &mut Ui) {
        callout(ui, |ui| {
            ui.label_subheader(UI_TEXT.reactions_heading);
            ui.add_space(6.0);
            Grid::new("earnings_reactions")
                .striped(true)
                .min_col_width(UI_CONFIG.table_min_col_width)
                .show(ui, |ui| {
                    for column in UI_TEXT.reaction_columns {
                        ui.label(RichText::new(column).strong());
                    }
                    ui.end_row();

                    for reaction in UI_TEXT.reactions {
                        ui.label(reaction.period);
                        ui.label(reaction.reaction);
                        ui.label(reaction.drivers);
                        ui.end_row();
                    }
                });
        });

        ui.add_space(12.0);

        callout(ui, |ui| {
            ui.label_subheader(UI_TEXT.drivers_heading);
            ui.add_space(6.0);
            for (i, driver) in UI_TEXT.drivers.iter().enumerate() {
                ui.label(format!("{}. {}", i + 1, driver));
            }
        });
    }
}

fn callout(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::new()
        .fill(UI_CONFIG.colors.callout_fill)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.callout_accent))
        .corner_radius(6.0)
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
