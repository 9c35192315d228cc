use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::ChartResult;

/// One sample of a line series in data space.
///
/// A point with both coordinates NaN is the "null point" and marks a gap in
/// the line. Equality is plain `f64` equality, so null points never compare
/// equal to anything, themselves included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
        }
    }

    #[must_use]
    pub fn is_null(self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }

    /// Exact coordinate match; no tolerance is applied.
    #[must_use]
    pub fn is_at(self, x: f64, y: f64) -> bool {
        self.x == x && self.y == y
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.16, 0.47, 0.96)
    }
}

/// Axis extents shown by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ChartBounds {
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Tight bounds around every non-null point, or `None` when there are none.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DataPoint>) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for point in points.into_iter().filter(|point| !point.is_null()) {
            bounds = Some(match bounds {
                None => Self::new(point.x, point.x, point.y, point.y),
                Some(current) => Self::new(
                    current.min_x.min(point.x),
                    current.max_x.max(point.x),
                    current.min_y.min(point.y),
                    current.max_y.max(point.y),
                ),
            });
        }
        bounds
    }
}
