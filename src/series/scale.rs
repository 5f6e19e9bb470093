use {
    crate::{config::CHART_CONFIG, utils::TimeUtils},
    chrono::NaiveDate,
};

/// Human-friendly step size (1, 2, 5, 10, 20, 50...) covering `range` in
/// roughly `target_count` steps.
pub fn nice_step(range: f64, target_count: usize) -> f64 {
    if !(range.is_finite() && range > 0.0) {
        return 1.0;
    }
    let raw_step = range / target_count.max(1) as f64;
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Affine map from a value domain onto a screen range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (r1 - r0).abs() < f64::EPSILON {
            return d0;
        }
        d0 + (position - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Domain values on a nice step inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let lo = self.domain.0.min(self.domain.1);
        let hi = self.domain.0.max(self.domain.1);
        let step = nice_step(hi - lo, count);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Dates onto x, via whole days since the start of the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    origin: NaiveDate,
    days: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> Self {
        let span = TimeUtils::days_between(start, end) as f64;
        Self {
            origin: start,
            days: LinearScale::new((0.0, span), range),
        }
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        self.days
            .map(TimeUtils::days_between(self.origin, date) as f64)
    }

    /// Nearest whole date at `position`.
    pub fn invert(&self, position: f64) -> Option<NaiveDate> {
        TimeUtils::add_days(self.origin, self.days.invert(position))
    }

    pub fn range(&self) -> (f64, f64) {
        self.days.range
    }
}

/// The two fixed mappings the chart draws with: time -> x, heart rate -> y.
///
/// Plot points keep y in bpm (the plot owns the vertical pixel mapping);
/// `y` is still the screen mapping and the source of the value ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl ChartScales {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            x: TimeScale::new(CHART_CONFIG.anchor_date, today, CHART_CONFIG.x_range),
            y: LinearScale::new(CHART_CONFIG.y_domain, (CHART_CONFIG.height, 0.0)),
        }
    }

    pub fn point(&self, date: NaiveDate, bpm: u16) -> [f64; 2] {
        [self.x.map(date), bpm as f64]
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        self.y.ticks(CHART_CONFIG.y_ticks)
    }
}
