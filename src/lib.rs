//! linechart-rs: state core for an animated, touch-interactive line chart.
//!
//! The crate owns two concerns and nothing else: tweening between two chart
//! data snapshots, and keeping the touch selection (indicators and tooltip
//! groups) consistent while the underlying series change. Drawing, hit
//! testing and timing are supplied by the host.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChartConfig, LineChartEngine};
pub use error::{ChartError, ChartResult};
