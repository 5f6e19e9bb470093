mod commands;
mod interval_store;
mod reorder;
mod validation;

pub use commands::{ChangeOrigin, IntervalCommand};
pub use interval_store::IntervalStore;
pub use reorder::{relocate, repositioned_index};
pub use validation::{FieldErrors, validate_start_date};

pub(crate) use commands::Relocation;
