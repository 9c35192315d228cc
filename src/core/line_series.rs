use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Color, DataPoint};
use crate::error::ChartResult;

/// One line of the chart: its points plus the point indexes currently
/// flagged as indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub points: Vec<DataPoint>,
    #[serde(default)]
    pub showing_indicators: Vec<usize>,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_visible() -> bool {
    true
}

impl LineSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            showing_indicators: Vec::new(),
            color: Color::default(),
            stroke_width: default_stroke_width(),
            visible: default_visible(),
        }
    }

    /// Builds a series from timestamped decimal samples, in the given order.
    pub fn from_decimal_samples<I>(samples: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (DateTime<Utc>, Decimal)>,
    {
        let points = samples
            .into_iter()
            .map(|(time, value)| DataPoint::from_decimal_time(time, value))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::new(points))
    }

    #[must_use]
    pub fn with_showing_indicators(mut self, indicators: Vec<usize>) -> Self {
        self.showing_indicators = indicators;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<DataPoint> {
        self.points.get(index).copied()
    }

    /// Index of the first point located exactly at `(x, y)`.
    #[must_use]
    pub fn position_of(&self, x: f64, y: f64) -> Option<usize> {
        self.points.iter().position(|point| point.is_at(x, y))
    }
}
