use {
    crate::{
        domain::{IntervalError, Period},
        series::ChartScales,
        utils::Clock,
    },
    chrono::NaiveDate,
    itertools::Itertools,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedPoint {
    pub date: NaiveDate,
    pub upper_limit: u16,
    pub lower_limit: u16,
}

impl From<&Period> for DerivedPoint {
    fn from(p: &Period) -> Self {
        Self {
            date: p.start_date,
            upper_limit: p.upper(),
            lower_limit: p.lower(),
        }
    }
}

/// One filled rectangle of the threshold band, in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSegment {
    pub x_start: f64,
    pub x_end: f64,
    pub bottom: f64,
    pub top: f64,
}

impl BandSegment {
    pub fn corners(&self) -> Vec<[f64; 2]> {
        vec![
            [self.x_start, self.bottom],
            [self.x_end, self.bottom],
            [self.x_end, self.top],
            [self.x_start, self.top],
        ]
    }
}

/// Input periods followed by the synthetic "today" point.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    points: Vec<DerivedPoint>,
}

/// Derive the plotted points: every period in sequence order, then a point at
/// `clock.today()` carrying the bounds of the chronologically last period.
pub fn build_series(periods: &[Period], clock: &dyn Clock) -> Result<DerivedSeries, IntervalError> {
    // max_by_key keeps the last of equal maxima, i.e. the later row on ties.
    let last = periods
        .iter()
        .max_by_key(|p| p.start_date)
        .ok_or(IntervalError::EmptyState)?;

    let mut points: Vec<DerivedPoint> = periods.iter().map(DerivedPoint::from).collect();
    points.push(DerivedPoint {
        date: clock.today(),
        ..DerivedPoint::from(last)
    });
    Ok(DerivedSeries { points })
}

impl DerivedSeries {
    pub fn points(&self) -> &[DerivedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn today_point(&self) -> Option<&DerivedPoint> {
        self.points.last()
    }

    pub fn upper_curve(&self, scales: &ChartScales) -> Vec<[f64; 2]> {
        step_after(
            self.points
                .iter()
                .map(|p| scales.point(p.date, p.upper_limit)),
        )
    }

    pub fn lower_curve(&self, scales: &ChartScales) -> Vec<[f64; 2]> {
        step_after(
            self.points
                .iter()
                .map(|p| scales.point(p.date, p.lower_limit)),
        )
    }

    /// The shaded area between the bounds, one rectangle per period.
    pub fn band(&self, scales: &ChartScales) -> Vec<BandSegment> {
        self.points
            .iter()
            .tuple_windows()
            .map(|(a, b)| {
                let [x_start, upper] = scales.point(a.date, a.upper_limit);
                let [x_end, lower] = scales.point(b.date, a.lower_limit);
                BandSegment {
                    x_start,
                    x_end,
                    bottom: lower.min(upper),
                    top: lower.max(upper),
                }
            })
            .collect()
    }
}

/// Step curve that holds each value until the next x: `(x0,y0) (x1,y0) (x1,y1) ...`.
pub fn step_after(points: impl IntoIterator<Item = [f64; 2]>) -> Vec<[f64; 2]> {
    let mut out: Vec<[f64; 2]> = Vec::new();
    for [x, y] in points {
        if let Some(&[_, prev_y]) = out.last() {
            out.push([x, prev_y]);
        }
        out.push([x, y]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;
    use assert_matches::assert_matches;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Vec<Period> {
        vec![
            Period::new(138, 143, d(2023, 2, 1)),
            Period::new(120, 127, d(2023, 4, 10)),
            Period::new(130, 140, d(2023, 5, 5)),
        ]
    }

    #[test]
    fn appends_today_with_last_bounds() {
        let clock = FixedClock(d(2023, 6, 1));
        let series = build_series(&sample(), &clock).unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(
            series.today_point(),
            Some(&DerivedPoint {
                date: d(2023, 6, 1),
                upper_limit: 140,
                lower_limit: 130,
            })
        );
    }

    #[test]
    fn trailing_point_follows_chronological_last_not_position() {
        let mut periods = sample();
        periods.swap(0, 2);
        let series = build_series(&periods, &FixedClock(d(2023, 6, 1))).unwrap();
        let today = series.today_point().unwrap();
        assert_eq!((today.lower_limit, today.upper_limit), (130, 140));
    }

    #[test]
    fn trailing_point_tracks_the_clock() {
        let periods = sample();
        let a = build_series(&periods, &FixedClock(d(2023, 6, 1))).unwrap();
        let b = build_series(&periods, &FixedClock(d(2023, 7, 1))).unwrap();
        assert_eq!(a.points()[..3], b.points()[..3]);
        assert_eq!(b.today_point().unwrap().date, d(2023, 7, 1));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_matches!(
            build_series(&[], &FixedClock(d(2023, 6, 1))),
            Err(IntervalError::EmptyState)
        );
    }

    #[test]
    fn step_after_shape() {
        let curve = step_after([[0.0, 1.0], [2.0, 3.0], [5.0, 4.0]]);
        assert_eq!(
            curve,
            vec![[0.0, 1.0], [2.0, 1.0], [2.0, 3.0], [5.0, 3.0], [5.0, 4.0]]
        );
        assert!(step_after([]).is_empty());
    }

    #[test]
    fn curves_have_two_vertices_per_step() {
        let clock = FixedClock(d(2023, 6, 1));
        let series = build_series(&sample(), &clock).unwrap();
        let scales = ChartScales::new(clock.0);
        let upper = series.upper_curve(&scales);
        assert_eq!(upper.len(), 2 * series.len() - 1);
        assert_eq!(upper.last().unwrap(), &[575.0, 140.0]);
        assert_eq!(series.lower_curve(&scales)[0][1], 138.0);
    }

    #[test]
    fn band_spans_each_period() {
        let clock = FixedClock(d(2023, 6, 1));
        let series = build_series(&sample(), &clock).unwrap();
        let scales = ChartScales::new(clock.0);
        let band = series.band(&scales);
        assert_eq!(band.len(), 3);
        assert_eq!((band[1].bottom, band[1].top), (120.0, 127.0));
        assert_eq!(band[2].x_end, 575.0);
        assert_eq!(band[0].x_end, band[1].x_start);
    }

    #[test]
    fn inverted_period_still_yields_a_positive_band() {
        let periods = vec![Period::new(150, 140, d(2023, 1, 1))];
        let clock = FixedClock(d(2023, 2, 1));
        let band = build_series(&periods, &clock)
            .unwrap()
            .band(&ChartScales::new(clock.0));
        assert_eq!((band[0].bottom, band[0].top), (140.0, 150.0));
    }
}
