// Domain types and value objects
mod errors;
mod period;

pub use errors::{IntervalError, ValidationError};
pub use period::{FieldEdit, LimitField, Period, PeriodField, PeriodId};
