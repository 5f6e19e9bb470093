use thiserror::Error;

/// Field-level, non-fatal. Shown next to the offending input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("start date cannot be before previous period")]
    StartBeforePrevious,
    #[error("required")]
    Required,
    #[error("must be a whole number")]
    NotANumber,
}

/// Misuse of the interval store. Recoverable; callers log and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("no periods loaded")]
    EmptyState,
    #[error("interval data is still loading")]
    NotReady,
    #[error("period index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
