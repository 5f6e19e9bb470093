use crate::domain::{FieldEdit, Period};

/// A user-originated mutation of the interval store.
#[derive(Debug, Clone, PartialEq)]
pub enum IntervalCommand {
    Load(Vec<Period>),
    Append,
    Remove(usize),
    Edit { index: usize, edit: FieldEdit },
}

/// A programmatic move issued by the store itself to restore ordering.
/// Never validated and never re-triggers the reorder scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Relocation {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

/// Who caused the most recent change to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    User,
    Programmatic,
}
