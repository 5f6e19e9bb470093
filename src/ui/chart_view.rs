use {
    crate::{
        config::{CHART_CONFIG, DF},
        series::{ChartScales, SeriesCache, nice_step},
        store::IntervalStore,
        ui::{LayerContext, UI_CONFIG, UI_TEXT, layer_stack},
        utils::TimeUtils,
    },
    eframe::egui::{RichText, Ui},
    egui_plot::{AxisHints, GridMark, HPlacement, Plot, VPlacement},
    serde::{Deserialize, Serialize},
};

/// Which chart layers are drawn. Persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartVisibility {
    pub upper: bool,
    pub lower: bool,
    pub band: bool,
    pub grid: bool,
}

impl Default for ChartVisibility {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            band: true,
            grid: true,
        }
    }
}

#[derive(Default)]
pub struct ChartView {
    cache: SeriesCache,
}

fn create_time_axis(scales: ChartScales) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, _range| {
            scales
                .x
                .invert(mark.value)
                .map(TimeUtils::format_date)
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_value_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark, _range| format!("{:.0}", mark.value))
        .placement(HPlacement::Left)
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuilds(&self) -> usize {
        self.cache.rebuilds()
    }

    pub fn show(&mut self, ui: &mut Ui, store: &IntervalStore, visibility: &ChartVisibility) {
        let scales = ChartScales::new(store.clock().today());
        let series = match self.cache.get_or_build(store) {
            Ok(series) => series,
            Err(e) => {
                if DF.log_series_cache {
                    log::warn!("No series to draw: {}", e);
                }
                ui.label(RichText::new(&UI_TEXT.plot_unavailable).color(UI_CONFIG.colors.subdued));
                return;
            }
        };

        let (x_min, x_max) = scales.x.range();
        let (y_min, y_max) = CHART_CONFIG.y_domain;
        let y_ticks = scales.y_ticks();

        Plot::new("zone_chart")
            .height(CHART_CONFIG.height as f32 + 40.0)
            .width(x_max as f32 + 60.0)
            .custom_x_axes(vec![create_time_axis(scales)])
            .custom_y_axes(vec![create_value_axis()])
            .label_formatter(|_, _| String::new())
            .show_grid(false)
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let step = nice_step(max - min, 5);
                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * step,
                        step_size: step,
                    })
                    .collect()
            })
            .y_grid_spacer(move |_input| {
                let step = nice_step(y_max - y_min, CHART_CONFIG.y_ticks);
                y_ticks
                    .iter()
                    .map(|&value| GridMark {
                        value,
                        step_size: step,
                    })
                    .collect()
            })
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                let ctx = LayerContext {
                    series,
                    scales: &scales,
                    visibility,
                    y_bounds: (y_min, y_max),
                };

                for layer in layer_stack(ctx.visibility) {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}
