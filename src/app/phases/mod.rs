pub(super) mod bootstrap;
pub(super) mod editing;
pub(super) mod failed;
pub(super) mod phase_view;

pub(crate) use phase_view::PhaseView;
