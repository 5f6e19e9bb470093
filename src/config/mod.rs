//! Configuration module for the heart-rate zone planner.

// Can all be private now because we have a public re-export.
mod bootstrap;
mod debug;
mod persistence;

// Can't be private because the UI reaches into it for colours
pub mod chart;

// Re-export commonly used items
pub use bootstrap::{BOOTSTRAP, BootstrapConfig, DemoLimit};
pub use chart::{CHART_CONFIG, ChartConfig};
pub use debug::DF;
pub use persistence::PERSISTENCE;
