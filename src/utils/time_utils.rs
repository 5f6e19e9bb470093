use chrono::{Duration, Local, NaiveDate};

/// Monotonic instant that also works on wasm32.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Parse a `YYYY-MM-DD` string as used by the snapshot wire format.
    pub fn parse_date(text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), Self::STANDARD_TIME_FORMAT).ok()
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::STANDARD_TIME_FORMAT).to_string()
    }

    /// Whole days from `from` to `to` (negative when `to` is earlier).
    pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
        (to - from).num_days()
    }

    /// Offset a date by a (possibly fractional) number of days, rounding to the nearest day.
    pub fn add_days(date: NaiveDate, days: f64) -> Option<NaiveDate> {
        if !days.is_finite() {
            return None;
        }
        date.checked_add_signed(Duration::days(days.round() as i64))
    }
}

/// Source of "today". Injected wherever the current date matters so the store
/// and series builder stay deterministic under test.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the user's local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_and_format_are_symmetric() {
        let date = TimeUtils::parse_date("2023-04-10").unwrap();
        assert_eq!(date, d(2023, 4, 10));
        assert_eq!(TimeUtils::format_date(date), "2023-04-10");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(TimeUtils::parse_date("10/04/2023"), None);
        assert_eq!(TimeUtils::parse_date(""), None);
    }

    #[test]
    fn add_days_rounds_and_rejects_nan() {
        assert_eq!(TimeUtils::add_days(d(2023, 1, 1), 1.6), Some(d(2023, 1, 3)));
        assert_eq!(TimeUtils::add_days(d(2023, 1, 1), f64::NAN), None);
        assert_eq!(TimeUtils::days_between(d(2023, 1, 10), d(2023, 1, 1)), -9);
    }

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedClock(d(2024, 2, 29));
        assert_eq!(clock.today(), d(2024, 2, 29));
    }
}
