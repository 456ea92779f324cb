use colorgrad::Gradient;
use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::models::DashboardModel;
use crate::ui::plot_layers::{LayerContext, MarkerLayer, PlotLayer, PriceLineLayer, SnapLineLayer};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_pct;
use crate::utils::TimeUtils;
use crate::utils::maths_utils::{get_min_max, pad_range};

#[derive(Clone, Debug)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: Color32,
}

/// Everything one chart needs, precomputed so a frame only draws.
#[derive(Clone, Debug)]
pub struct SeriesPlotData {
    pub line_name: &'static str,
    pub marker_name: &'static str,
    pub line: Vec<[f64; 2]>,
    pub line_color: Color32,
    pub line_width: f32,
    pub markers: Vec<MarkerPoint>,
    pub vlines: Vec<f64>,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

impl SeriesPlotData {
    /// Vertical gap between a marker and its text label
    pub fn label_offset(&self) -> f64 {
        (self.y_bounds.1 - self.y_bounds.0) * 0.02
    }
}

/// One zoom chart per year. `data` is `Err` when the window is unavailable.
#[derive(Clone, Debug)]
pub struct WindowPlot {
    pub year: i32,
    pub title: String,
    pub prev_pct: Option<f64>,
    pub next_pct: Option<f64>,
    pub data: Result<SeriesPlotData, String>,
}

#[derive(Clone, Copy)]
pub enum PlotSizing {
    Aspect(f32),
    Height(f32),
}

/// Plot data for every chart of the dashboard, built once from the model.
#[derive(Default)]
pub struct PlotView {
    pub trend: Option<SeriesPlotData>,
    pub windows: Vec<WindowPlot>,
}

impl PlotView {
    pub fn new(model: &DashboardModel) -> Self {
        let year_count = model.windows.len().max(1);
        Self {
            trend: trend_plot_data(model, year_count),
            windows: window_plots(model, year_count),
        }
    }

    pub fn show_trend(&self, ui: &mut egui::Ui) {
        if let Some(data) = &self.trend {
            show_series_plot(ui, "trend_plot", data, PlotSizing::Aspect(PLOT_CONFIG.trend_aspect_ratio));
        }
    }
}

fn trend_plot_data(model: &DashboardModel, year_count: usize) -> Option<SeriesPlotData> {
    let line: Vec<[f64; 2]> = model
        .two_week
        .iter()
        .map(|p| [TimeUtils::date_to_plot_x(p.date), p.close])
        .collect();
    let closes: Vec<f64> = model.two_week.iter().map(|p| p.close).collect();
    let (y_min, y_max) = get_min_max(&closes)?;
    let first = line.first()?[0];
    let last = line.last()?[0];

    let markers = match &model.markers {
        Ok(markers) => markers
            .iter()
            .enumerate()
            .map(|(i, m)| MarkerPoint {
                x: TimeUtils::date_to_plot_x(m.date),
                y: m.close,
                label: m.year.to_string(),
                color: year_color(i, year_count),
            })
            .collect(),
        Err(e) => {
            log::warn!("Year-end markers unavailable: {}", e);
            Vec::new()
        }
    };

    Some(SeriesPlotData {
        line_name: UI_TEXT.trend_line_name,
        marker_name: UI_TEXT.marker_name,
        line,
        line_color: PLOT_CONFIG.trend_line_color,
        line_width: PLOT_CONFIG.trend_line_width,
        markers,
        vlines: Vec::new(),
        x_bounds: (first, last),
        y_bounds: pad_range(y_min, y_max, PLOT_CONFIG.y_padding_pct),
    })
}

fn window_plots(model: &DashboardModel, year_count: usize) -> Vec<WindowPlot> {
    model
        .windows
        .iter()
        .enumerate()
        .map(|(i, window)| {
            let seg = match &window.segment {
                Ok(seg) => seg,
                Err(e) => {
                    return WindowPlot {
                        year: window.year,
                        title: format!("{} [{}]", window.year, UI_TEXT.unavailable),
                        prev_pct: None,
                        next_pct: None,
                        data: Err(e.to_string()),
                    };
                }
            };

            let title = format!(
                "{} year-end ±{} days (snapped to {}) [{}: {}, {}: {}]",
                window.year,
                seg.radius_days,
                TimeUtils::format(seg.snap.date),
                UI_TEXT.window_prev,
                format_pct(seg.prev_pct),
                UI_TEXT.window_next,
                format_pct(seg.next_pct)
            );

            let line: Vec<[f64; 2]> = seg
                .points
                .iter()
                .map(|p| [TimeUtils::date_to_plot_x(p.date), p.close])
                .collect();
            let closes: Vec<f64> = seg.points.iter().map(|p| p.close).collect();
            // The snap is always inside its own window, so this only guards odd data
            let (y_min, y_max) = get_min_max(&closes).unwrap_or((seg.snap.close, seg.snap.close));
            let snap_x = TimeUtils::date_to_plot_x(seg.snap.date);

            let data = SeriesPlotData {
                line_name: UI_TEXT.window_line_name,
                marker_name: UI_TEXT.window_marker_name,
                line,
                line_color: PLOT_CONFIG.daily_line_color,
                line_width: PLOT_CONFIG.daily_line_width,
                markers: vec![MarkerPoint {
                    x: snap_x,
                    y: seg.snap.close,
                    label: window.year.to_string(),
                    color: year_color(i, year_count),
                }],
                vlines: vec![snap_x],
                x_bounds: (
                    TimeUtils::date_to_plot_x(seg.start),
                    TimeUtils::date_to_plot_x(seg.end),
                ),
                y_bounds: pad_range(y_min, y_max, PLOT_CONFIG.y_padding_pct),
            };

            WindowPlot {
                year: window.year,
                title,
                prev_pct: seg.prev_pct,
                next_pct: seg.next_pct,
                data: Ok(data),
            }
        })
        .collect()
}

pub fn show_series_plot(ui: &mut egui::Ui, id: impl std::hash::Hash, data: &SeriesPlotData, sizing: PlotSizing) {
    let legend = Legend::default().position(Corner::LeftTop);

    let mut plot = Plot::new(id)
        .legend(legend)
        .custom_x_axes(vec![create_x_axis()])
        .custom_y_axes(vec![create_y_axis()])
        .label_formatter(|name, value| {
            let date = TimeUtils::plot_x_to_date(value.x)
                .map(TimeUtils::format)
                .unwrap_or_default();
            if name.is_empty() {
                format!("{}\n${:.2}", date, value.y)
            } else {
                format!("{}\n{}\n${:.2}", name, date, value.y)
            }
        })
        .allow_scroll(false)
        .allow_boxed_zoom(false);

    plot = match sizing {
        PlotSizing::Aspect(ratio) => plot.view_aspect(ratio),
        PlotSizing::Height(height) => plot.height(height),
    };

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds_x(data.x_bounds.0..=data.x_bounds.1);
        plot_ui.set_plot_bounds_y(data.y_bounds.0..=data.y_bounds.1);

        let ctx = LayerContext { data };

        // Back to front
        let layers: Vec<Box<dyn PlotLayer>> = vec![
            Box::new(SnapLineLayer),
            Box::new(PriceLineLayer),
            Box::new(MarkerLayer),
        ];

        for layer in layers {
            layer.render(plot_ui, &ctx);
        }
    });
}

/// Marker color for the `i`th of `n` years, oldest year at the start of the gradient.
fn year_color(i: usize, n: usize) -> Color32 {
    let grad = match colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.year_gradient_colors)
        .build::<colorgrad::LinearGradient>()
    {
        Ok(grad) => grad,
        Err(e) => {
            log::warn!("Falling back to a flat marker color: {}", e);
            return Color32::RED;
        }
    };
    let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
    to_egui_color(grad.at(t))
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| {
            TimeUtils::plot_x_to_date(grid_mark.value)
                .map(TimeUtils::format)
                .unwrap_or_default()
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format!("${:.0}", grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use crate::domain::{PricePoint, PriceSeries};
    use chrono::{Datelike, Duration, NaiveDate, Weekday};

    #[test]
    fn plot_data_follows_the_model() {
        let mut points = Vec::new();
        let mut date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        while date <= end {
            if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                points.push(PricePoint::new(date, 400.0 + date.ordinal() as f64));
            }
            date += Duration::days(1);
        }
        let model = DashboardModel::build("NFLX", PriceSeries::from_points(points), &ANALYSIS);

        let view = PlotView::new(&model);

        let trend = view.trend.as_ref().unwrap();
        assert_eq!(trend.line.len(), model.two_week.len());
        assert_eq!(trend.markers.len(), 4);
        assert!(trend.y_bounds.0 < trend.y_bounds.1);

        assert_eq!(view.windows.len(), 4);
        for plot in &view.windows {
            let data = plot.data.as_ref().unwrap();
            assert_eq!(data.vlines.len(), 1);
            assert!(data.line.iter().all(|p| p[0] >= data.x_bounds.0 && p[0] <= data.x_bounds.1));
            assert!(plot.title.starts_with(&plot.year.to_string()));
            assert!(plot.title.contains(&format!("{}: {}", UI_TEXT.window_prev, format_pct(plot.prev_pct))));
            assert!(plot.title.contains(&format!("{}: {}", UI_TEXT.window_next, format_pct(plot.next_pct))));
        }
    }

    #[test]
    fn window_title_marks_missing_deltas_as_unavailable() {
        let only = PricePoint::new(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(), 602.44);
        let model = DashboardModel::build("NFLX", PriceSeries::from_points(vec![only]), &ANALYSIS);

        let view = PlotView::new(&model);

        let title = &view.windows[0].title;
        assert!(title.contains("(snapped to 2021-12-31)"));
        assert!(title.ends_with(&format!(
            "[{}: {}, {}: {}]",
            UI_TEXT.window_prev, UI_TEXT.unavailable, UI_TEXT.window_next, UI_TEXT.unavailable
        )));
    }

    #[test]
    fn first_and_last_years_use_the_gradient_ends() {
        assert_eq!(year_color(0, 4), Color32::from_rgb(0xff, 0xb7, 0x03));
        assert_eq!(year_color(3, 4), Color32::from_rgb(0xb2, 0x22, 0x22));
        // A single year sits at the start of the gradient
        assert_eq!(year_color(0, 1), year_color(0, 4));
    }
}
