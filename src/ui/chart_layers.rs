use eframe::egui::{Color32, Stroke};
use egui_plot::{HLine, Line, PlotPoints, PlotUi, Polygon};

use crate::config::CHART_CONFIG;
use crate::series::{ChartScales, DerivedSeries};
use crate::ui::ChartVisibility;

/// Everything a layer may draw from. Rebuilt every frame; the series itself
/// comes out of the cache.
pub struct LayerContext<'a> {
    pub series: &'a DerivedSeries,
    pub scales: &'a ChartScales,
    pub visibility: &'a ChartVisibility,
    pub y_bounds: (f64, f64),
}

pub trait ChartLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// BACKGROUND
// ============================================================================
pub struct BackgroundLayer;

impl ChartLayer for BackgroundLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let (x0, x1) = ctx.scales.x.range();
        let (y0, y1) = ctx.y_bounds;
        let rect = vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]];
        plot_ui.polygon(
            Polygon::new("", PlotPoints::new(rect))
                .fill_color(CHART_CONFIG.background_color)
                .stroke(Stroke::NONE),
        );
    }
}

// ============================================================================
// GRID ROWS (one horizontal rule per value tick)
// ============================================================================
pub struct GridRowsLayer;

impl ChartLayer for GridRowsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for y in ctx.scales.y_ticks() {
            plot_ui.hline(
                HLine::new("", y)
                    .color(CHART_CONFIG.grid_color)
                    .width(CHART_CONFIG.grid_width),
            );
        }
    }
}

// ============================================================================
// THRESHOLD BAND (area between the two step curves)
// ============================================================================
pub struct ThresholdBandLayer;

impl ChartLayer for ThresholdBandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let fill = CHART_CONFIG
            .band_color
            .linear_multiply(CHART_CONFIG.band_opacity);

        // egui_plot only fills convex shapes correctly, so one rectangle per step.
        for segment in ctx.series.band(ctx.scales) {
            plot_ui.polygon(
                Polygon::new("", PlotPoints::new(segment.corners()))
                    .fill_color(fill)
                    .stroke(Stroke::NONE),
            );
        }
    }
}

// ============================================================================
// BOUND LINES
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Upper,
    Lower,
}

pub struct BoundLineLayer {
    pub bound: Bound,
}

impl BoundLineLayer {
    fn color(&self) -> Color32 {
        match self.bound {
            Bound::Upper => CHART_CONFIG.upper_line_color,
            Bound::Lower => CHART_CONFIG.lower_line_color,
        }
    }
}

impl ChartLayer for BoundLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let (name, points) = match self.bound {
            Bound::Upper => ("upper", ctx.series.upper_curve(ctx.scales)),
            Bound::Lower => ("lower", ctx.series.lower_curve(ctx.scales)),
        };
        if points.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(name, PlotPoints::new(points))
                .color(self.color())
                .width(CHART_CONFIG.line_width),
        );
    }
}

/// Layer stack for the current toggles, bottom first.
pub fn layer_stack(visibility: &ChartVisibility) -> Vec<Box<dyn ChartLayer>> {
    let mut layers: Vec<Box<dyn ChartLayer>> = Vec::with_capacity(5);
    layers.push(Box::new(BackgroundLayer));
    if visibility.grid {
        layers.push(Box::new(GridRowsLayer));
    }
    if visibility.band {
        layers.push(Box::new(ThresholdBandLayer));
    }
    if visibility.upper {
        layers.push(Box::new(BoundLineLayer {
            bound: Bound::Upper,
        }));
    }
    if visibility.lower {
        layers.push(Box::new(BoundLineLayer {
            bound: Bound::Lower,
        }));
    }
    layers
}
