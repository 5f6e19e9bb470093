//! Chart visualization configuration

use chrono::NaiveDate;
use eframe::egui::Color32;

pub struct ChartConfig {
    /// Left edge of the time axis. The right edge is always "today".
    pub anchor_date: NaiveDate,
    /// Screen-space width the time axis maps onto.
    pub x_range: (f64, f64),
    /// Screen-space height of the plotting area (top is 0).
    pub height: f64,
    /// Fixed heart-rate domain in beats per minute.
    pub y_domain: (f64, f64),
    /// Tick count requested from the value axis and the grid rows.
    pub y_ticks: usize,

    pub upper_line_color: Color32,
    pub lower_line_color: Color32,
    pub line_width: f32,

    pub band_color: Color32,
    pub band_opacity: f32,

    pub grid_color: Color32,
    pub grid_width: f32,
    pub background_color: Color32,
}

const ANCHOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 12, 1) {
    Some(date) => date,
    None => panic!("invalid chart anchor date"),
};

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    anchor_date: ANCHOR_DATE,
    x_range: (0.0, 575.0),
    height: 175.0,
    y_domain: (90.0, 180.0),
    y_ticks: 5,

    upper_line_color: Color32::from_rgb(255, 165, 0), // orange
    lower_line_color: Color32::from_rgb(0, 0, 255),   // blue
    line_width: 1.0,

    band_color: Color32::from_rgb(0, 0, 255),
    band_opacity: 0.4,

    grid_color: Color32::GRAY,
    grid_width: 2.0,
    background_color: Color32::from_rgb(0xef, 0xef, 0xef),
};
