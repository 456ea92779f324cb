use eframe::egui::{Align2, RichText};
use egui_plot::{Line, LineStyle, MarkerShape, PlotPoint, PlotPoints, PlotUi, Points, Text, VLine};

use crate::config::plot::PLOT_CONFIG;
use crate::ui::ui_plot_view::SeriesPlotData;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub data: &'a SeriesPlotData,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. PRICE LINE LAYER
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let data = ctx.data;
        let line = Line::new(data.line_name, PlotPoints::new(data.line.clone()))
            .color(data.line_color)
            .width(data.line_width);
        plot_ui.line(line);
    }
}

// ============================================================================
// 2. SNAP LINE LAYER (dashed vertical at each snapped date)
// ============================================================================
pub struct SnapLineLayer;

impl PlotLayer for SnapLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for &x in &ctx.data.vlines {
            plot_ui.vline(
                VLine::new("", x)
                    .color(PLOT_CONFIG.snap_line_color)
                    .style(LineStyle::dashed_loose()),
            );
        }
    }
}

// ============================================================================
// 3. MARKER LAYER (outlined asterisk + year label above it)
// ============================================================================
pub struct MarkerLayer;

impl PlotLayer for MarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let data = ctx.data;
        for marker in &data.markers {
            // Outline first so the colored marker sits on top
            plot_ui.points(
                Points::new(data.marker_name, vec![[marker.x, marker.y]])
                    .shape(MarkerShape::Asterisk)
                    .radius(PLOT_CONFIG.marker_outline_radius)
                    .color(PLOT_CONFIG.marker_outline_color),
            );
            plot_ui.points(
                Points::new(data.marker_name, vec![[marker.x, marker.y]])
                    .shape(MarkerShape::Asterisk)
                    .radius(PLOT_CONFIG.marker_radius)
                    .color(marker.color),
            );
            plot_ui.text(
                Text::new(
                    data.marker_name,
                    PlotPoint::new(marker.x, marker.y + data.label_offset()),
                    RichText::new(&marker.label).strong().color(marker.color),
                )
                .anchor(Align2::CENTER_BOTTOM),
            );
        }
    }
}
