use {
    crate::domain::{Period, PeriodField, ValidationError},
    chrono::NaiveDate,
    strum::IntoEnumIterator,
};

/// The period immediately before `index` (by position, not by date) must not
/// start after `candidate`.
pub fn validate_start_date(
    periods: &[Period],
    index: usize,
    candidate: NaiveDate,
) -> Result<(), ValidationError> {
    let previous = index.checked_sub(1).and_then(|prev| periods.get(prev));
    match previous {
        Some(prev) if prev.start_date > candidate => Err(ValidationError::StartBeforePrevious),
        _ => Ok(()),
    }
}

/// Per-field messages for one period. `None` means valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub lower_limit: Option<ValidationError>,
    pub upper_limit: Option<ValidationError>,
    pub start_date: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: PeriodField) -> Option<ValidationError> {
        match field {
            PeriodField::LowerLimit => self.lower_limit,
            PeriodField::UpperLimit => self.upper_limit,
            PeriodField::StartDate => self.start_date,
        }
    }

    pub fn set(&mut self, field: PeriodField, result: Result<(), ValidationError>) {
        let slot = match field {
            PeriodField::LowerLimit => &mut self.lower_limit,
            PeriodField::UpperLimit => &mut self.upper_limit,
            PeriodField::StartDate => &mut self.start_date,
        };
        *slot = result.err();
    }

    /// Display text for a field, if it is invalid.
    pub fn message(&self, field: PeriodField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        PeriodField::iter().all(|field| self.get(field).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn before_previous_is_rejected_with_message() {
        let result = validate_start_date(&sample(), 2, d(2023, 4, 5));
        assert_eq!(result, Err(ValidationError::StartBeforePrevious));
        assert_eq!(
            result.unwrap_err().to_string(),
            "start date cannot be before previous period"
        );
    }

    #[test]
    fn after_previous_is_valid() {
        assert_eq!(validate_start_date(&sample(), 2, d(2023, 4, 15)), Ok(()));
        // Same day as the previous period is allowed.
        assert_eq!(validate_start_date(&sample(), 2, d(2023, 4, 10)), Ok(()));
    }

    #[test]
    fn first_position_has_nothing_to_compare() {
        assert_eq!(validate_start_date(&sample(), 0, d(2000, 1, 1)), Ok(()));
    }

    #[test]
    fn field_errors_set_and_clear() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());

        errors.set(PeriodField::UpperLimit, Err(ValidationError::Required));
        assert_eq!(errors.message(PeriodField::UpperLimit).as_deref(), Some("required"));
        assert!(!errors.is_empty());

        errors.set(PeriodField::UpperLimit, Ok(()));
        assert!(errors.is_empty());
    }
}
