#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod series;
pub mod store;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::PERSISTENCE;
pub use domain::{FieldEdit, Period, PeriodField};
pub use store::{IntervalCommand, IntervalStore};

// CLI argument parsing
use {clap::Parser, std::path::PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load the initial limits from a JSON snapshot instead of the built-in demo
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Override the simulated fetch latency of the demo source (milliseconds)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
