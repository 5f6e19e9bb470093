mod bootstrap;
mod provider;
mod snapshot;
mod submit;

pub use {
    bootstrap::{BootstrapResult, fetch_limits, run_bootstrap, spawn_bootstrap},
    provider::{LimitsSource, SimulatedSource},
    snapshot::{LimitEntry, LimitsSnapshot, SnapshotError},
    submit::{LogSink, SubmitSink},
};

#[cfg(not(target_arch = "wasm32"))]
pub use provider::FileSource;
