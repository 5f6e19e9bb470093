mod chart_layers;
mod chart_view;
mod period_form;
mod screens;
mod ui_config;
mod ui_text;

pub(crate) use chart_layers::{LayerContext, layer_stack};
pub(crate) use chart_view::{ChartView, ChartVisibility};
pub(crate) use period_form::{FormOutcome, PeriodForm};
pub(crate) use screens::{render_bootstrap, render_failed};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
