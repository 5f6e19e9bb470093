// src/app/state.rs

use crate::utils::AppInstant;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Editing(EditingState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

#[derive(Clone)]
pub(crate) struct BootstrapState {
    pub(crate) started: AppInstant,
    pub(crate) source_name: &'static str,
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self {
            started: AppInstant::now(),
            source_name: "",
        }
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct EditingState;

#[derive(Clone, Default)]
pub(crate) struct FailedState {
    pub(crate) message: String,
}

/// Transient line in the status bar.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum StatusMessage {
    Info(String),
    Warning(String),
}
