use {
    crate::domain::ValidationError,
    chrono::NaiveDate,
    strum_macros::{Display, EnumIter},
    uuid::Uuid,
};

/// Stable identity of a period across reorders. Used for widget ids and
/// to key validation messages.
pub type PeriodId = Uuid;

/// Which editable field of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PeriodField {
    #[strum(to_string = "lowerLimit")]
    LowerLimit,
    #[strum(to_string = "upperLimit")]
    UpperLimit,
    #[strum(to_string = "startDate")]
    StartDate,
}

/// A single edit to one field of one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    LowerLimit(String),
    UpperLimit(String),
    StartDate(NaiveDate),
}

impl FieldEdit {
    pub fn field(&self) -> PeriodField {
        match self {
            Self::LowerLimit(_) => PeriodField::LowerLimit,
            Self::UpperLimit(_) => PeriodField::UpperLimit,
            Self::StartDate(_) => PeriodField::StartDate,
        }
    }
}

/// A heart-rate limit as the user types it. `raw` is whatever is in the text box;
/// `value` is the last text that parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitField {
    raw: String,
    value: u16,
}

impl LimitField {
    pub fn parse(text: &str) -> Result<u16, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required);
        }
        trimmed
            .parse::<u16>()
            .map_err(|_| ValidationError::NotANumber)
    }

    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let value = Self::parse(text)?;
        Ok(Self {
            raw: text.trim().to_string(),
            value,
        })
    }

    pub fn from_value(value: u16) -> Self {
        Self {
            raw: value.to_string(),
            value,
        }
    }

    /// Store the text unconditionally; the numeric value only follows when it parses.
    pub fn set_raw(&mut self, text: String) -> Result<(), ValidationError> {
        let parsed = Self::parse(&text);
        self.raw = text;
        self.value = parsed?;
        Ok(())
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> u16 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub id: PeriodId,
    pub lower_limit: LimitField,
    pub upper_limit: LimitField,
    pub start_date: NaiveDate,
}

impl Period {
    pub fn new(lower: u16, upper: u16, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            lower_limit: LimitField::from_value(lower),
            upper_limit: LimitField::from_value(upper),
            start_date,
        }
    }

    /// Copy of the last valid bounds with a fresh identity, e.g. for "Add".
    /// Unparsed text in `previous` is not carried over.
    pub fn seeded_from(previous: &Period, start_date: NaiveDate) -> Self {
        Self::new(previous.lower(), previous.upper(), start_date)
    }

    pub fn lower(&self) -> u16 {
        self.lower_limit.value()
    }

    pub fn upper(&self) -> u16 {
        self.upper_limit.value()
    }

    /// Upper bound below lower bound. Tolerated, only hinted at in the UI.
    pub fn is_inverted(&self) -> bool {
        self.upper() < self.lower()
    }

    /// `(lower, upper, start_date)`, identity stripped. Handy for comparisons.
    pub fn summary(&self) -> (u16, u16, NaiveDate) {
        (self.lower(), self.upper(), self.start_date)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}-{} bpm from {}",
            self.lower_limit.raw(),
            self.upper_limit.raw(),
            self.start_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn limit_parse_errors() {
        assert_eq!(LimitField::parse(""), Err(ValidationError::Required));
        assert_eq!(LimitField::parse("   "), Err(ValidationError::Required));
        assert_eq!(LimitField::parse("12a"), Err(ValidationError::NotANumber));
        assert_eq!(LimitField::parse("-5"), Err(ValidationError::NotANumber));
        assert_eq!(LimitField::parse(" 140 "), Ok(140));
    }

    #[test]
    fn set_raw_keeps_text_but_not_bad_value() {
        let mut field = LimitField::from_value(138);
        assert_eq!(field.set_raw("13".into()), Ok(()));
        assert_eq!(field.value(), 13);

        assert_eq!(field.set_raw("13x".into()), Err(ValidationError::NotANumber));
        assert_eq!(field.raw(), "13x");
        assert_eq!(field.value(), 13);
    }

    #[test]
    fn seeded_period_copies_bounds_with_new_id() {
        let original = Period::new(120, 127, d(2023, 4, 10));
        let seeded = Period::seeded_from(&original, d(2023, 6, 1));
        assert_ne!(seeded.id, original.id);
        assert_eq!(seeded.summary(), (120, 127, d(2023, 6, 1)));
    }

    #[test]
    fn seeded_period_drops_unparsed_text() {
        let mut original = Period::new(138, 143, d(2023, 2, 1));
        assert!(original.lower_limit.set_raw("13a".into()).is_err());

        let seeded = Period::seeded_from(&original, d(2023, 6, 1));
        assert_eq!(seeded.lower_limit.raw(), "138");
        assert_eq!(seeded.upper_limit.raw(), "143");
        assert_eq!(seeded.summary(), (138, 143, d(2023, 6, 1)));
    }

    #[test]
    fn inverted_bounds_are_detected() {
        assert!(Period::new(150, 140, d(2023, 1, 1)).is_inverted());
        assert!(!Period::new(140, 140, d(2023, 1, 1)).is_inverted());
    }

    #[test]
    fn field_names_match_wire_names() {
        assert_eq!(PeriodField::StartDate.to_string(), "startDate");
        assert_eq!(
            FieldEdit::LowerLimit("1".into()).field(),
            PeriodField::LowerLimit
        );
    }
}
