mod builder;
mod cache;
mod scale;

pub use builder::{BandSegment, DerivedPoint, DerivedSeries, build_series, step_after};
pub use cache::SeriesCache;
pub use scale::{ChartScales, LinearScale, TimeScale, nice_step};
