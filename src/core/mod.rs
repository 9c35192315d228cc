pub mod chart_data;
pub mod line_series;
pub mod primitives;
pub mod touch;
pub mod types;

pub use chart_data::LineChartData;
pub use line_series::LineSeries;
pub use touch::{
    LineTouchData, TooltipGroup, TouchCallback, TouchEvent, TouchEventKind, TouchResponse,
    TouchedSpot,
};
pub use types::{ChartBounds, Color, DataPoint};
