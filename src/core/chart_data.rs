use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, LineSeries, LineTouchData, TooltipGroup};

/// Immutable description of the whole chart at one instant.
///
/// Modifications go through the `with_*` helpers, which consume and return a
/// snapshot; call `.clone()` first to keep the original.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartData {
    pub series: Vec<LineSeries>,
    #[serde(default)]
    pub touch: LineTouchData,
    #[serde(default)]
    pub showing_tooltip_indicators: Vec<TooltipGroup>,
    #[serde(default)]
    pub bounds: Option<ChartBounds>,
}

impl LineChartData {
    #[must_use]
    pub fn new(series: Vec<LineSeries>) -> Self {
        Self {
            series,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Vec<LineSeries>) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_touch(mut self, touch: LineTouchData) -> Self {
        self.touch = touch;
        self
    }

    #[must_use]
    pub fn with_tooltip_groups(mut self, groups: Vec<TooltipGroup>) -> Self {
        self.showing_tooltip_indicators = groups;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Option<ChartBounds>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Bounds to draw with: explicit ones, or tight bounds over every series.
    #[must_use]
    pub fn resolved_bounds(&self) -> Option<ChartBounds> {
        self.bounds.or_else(|| {
            ChartBounds::from_points(self.series.iter().flat_map(|series| &series.points))
        })
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}
