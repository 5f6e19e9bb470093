mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, BootstrapState, EditingState, FailedState, StatusMessage};

pub use root::App;
