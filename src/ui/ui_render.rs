use eframe::egui::{CentralPanel, Context, Frame, Margin, RichText, ScrollArea, TopBottomPanel, Ui};
use strum::IntoEnumIterator;

use crate::config::ANALYSIS;
use crate::config::plot::PLOT_CONFIG;
use crate::data::LoadError;
use crate::models::DashboardModel;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    CommentaryPanel, Panel, ReturnSummaryPanel, WindowDeltaPanel, YearEndTablePanel,
};
use crate::ui::ui_plot_view::{PlotSizing, PlotView, show_series_plot};
use crate::ui::utils::{section_heading, spaced_separator};
use crate::utils::TimeUtils;

use super::app::{DataState, Tab, YearEndDashboardApp};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl Tab {
    pub fn label(&self) -> String {
        match self {
            Tab::Trend => UI_TEXT.tab_trend.to_string(),
            Tab::Windows => format!(
                "{}{}{}",
                UI_TEXT.tab_windows_prefix,
                ANALYSIS.year_end.window_radius_days,
                UI_TEXT.tab_windows_suffix
            ),
            Tab::Analysis => UI_TEXT.tab_analysis.to_string(),
        }
    }
}

impl YearEndDashboardApp {
    pub(super) fn render_tab_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for tab in Tab::iter() {
                    let previous = self.active_tab;
                    if ui
                        .selectable_value(&mut self.active_tab, tab, tab.label())
                        .clicked()
                        && previous != tab
                    {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Switched tab: {:?} -> {:?}", previous, tab);
                        }
                    }
                }
            });
            ui.add_space(6.0);
        });
    }

    pub(super) fn render_status_panel(&self, ctx: &Context) {
        let DataState::Ready { model, .. } = &self.data_state else {
            return;
        };
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&model.symbol).strong().color(UI_CONFIG.colors.heading));
                ui.separator();
                ui.metric(
                    UI_TEXT.status_observations,
                    &model.series.len().to_string(),
                    UI_CONFIG.colors.label,
                );
                if let Some((first, last)) = model.coverage() {
                    ui.separator();
                    ui.metric(
                        UI_TEXT.status_coverage,
                        &format!("{} → {}", TimeUtils::format(first), TimeUtils::format(last)),
                        UI_CONFIG.colors.label,
                    );
                }
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        let active_tab = self.active_tab;
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| match &self.data_state {
                DataState::Ready { model, plots } => {
                    ScrollArea::vertical()
                        .id_salt(active_tab)
                        .auto_shrink([false, false])
                        .show(ui, |ui| match active_tab {
                            Tab::Trend => render_trend_tab(ui, model, plots),
                            Tab::Windows => render_windows_tab(ui, plots),
                            Tab::Analysis => render_analysis_tab(ui),
                        });
                }
                DataState::Failed(error) => render_load_error(ui, error),
                DataState::Empty => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                    });
                }
            });
    }
}

fn render_trend_tab(ui: &mut Ui, model: &DashboardModel, plots: &PlotView) {
    section_heading(ui, format!("{} {}", model.symbol, UI_TEXT.trend_heading));
    plots.show_trend(ui);
    ui.add_space(6.0);
    for note in UI_TEXT.marker_notes {
        ui.label_subdued(format!("• {}", note));
    }

    spaced_separator(ui);
    ReturnSummaryPanel {
        returns: &model.returns,
    }
    .render(ui);

    spaced_separator(ui);
    YearEndTablePanel {
        rows: &model.year_end_rows,
    }
    .render(ui);
}

fn render_windows_tab(ui: &mut Ui, plots: &PlotView) {
    section_heading(ui, UI_TEXT.windows_heading);
    for window in &plots.windows {
        ui.add_space(8.0);
        ui.label_subheader(&window.title);
        match &window.data {
            Ok(data) => {
                WindowDeltaPanel {
                    prev_pct: window.prev_pct,
                    next_pct: window.next_pct,
                }
                .render(ui);
                show_series_plot(
                    ui,
                    ("window_plot", window.year),
                    data,
                    PlotSizing::Height(PLOT_CONFIG.window_plot_height),
                );
            }
            Err(msg) => ui.label_error(format!("{}: {}", UI_TEXT.unavailable, msg)),
        }
    }
}

fn render_analysis_tab(ui: &mut Ui) {
    section_heading(ui, UI_TEXT.analysis_heading);
    CommentaryPanel.render(ui);
}

fn render_load_error(ui: &mut Ui, error: &LoadError) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(UI_TEXT.error_heading);
        ui.add_space(10.0);
        ui.label_error(error.to_string());
        ui.add_space(20.0);
        ui.label(UI_TEXT.error_hint);
    });
}
