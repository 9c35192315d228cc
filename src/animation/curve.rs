use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const BISECTION_TOLERANCE: f64 = 0.001;
const BISECTION_MAX_STEPS: usize = 64;

/// Easing applied to linear animation progress before interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    FastOutSlowIn,
    /// Cubic bezier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
    Cubic { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Curve {
    #[must_use]
    pub const fn cubic(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Cubic { x1, y1, x2, y2 }
    }

    /// Maps linear progress to eased progress.
    ///
    /// Input is clamped to `[0, 1]`; both endpoints map exactly onto themselves.
    #[must_use]
    pub fn transform(self, t: f64) -> f64 {
        if t.is_nan() || t >= 1.0 {
            return 1.0;
        }
        if t <= 0.0 {
            return 0.0;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => solve_cubic(x1, y1, x2, y2, t),
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return Ok(self);
        };
        for (name, value) in [("x1", x1), ("x2", x2)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "cubic curve `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        for (name, value) in [("y1", y1), ("y2", y2)] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "cubic curve `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }

    fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Self::FastOutSlowIn => Some((0.4, 0.0, 0.2, 1.0)),
            Self::Cubic { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
        }
    }
}

fn bezier_component(a: f64, b: f64, m: f64) -> f64 {
    let inv = 1.0 - m;
    3.0 * a * inv * inv * m + 3.0 * b * inv * m * m + m * m * m
}

// Bisect on the x polynomial, then read y at the found parameter.
fn solve_cubic(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let mut start = 0.0;
    let mut end = 1.0;
    let mut mid = 0.5;
    for _ in 0..BISECTION_MAX_STEPS {
        mid = (start + end) / 2.0;
        let estimate = bezier_component(x1, x2, mid);
        if (t - estimate).abs() < BISECTION_TOLERANCE {
            break;
        }
        if estimate < t {
            start = mid;
        } else {
            end = mid;
        }
    }
    bezier_component(y1, y2, mid)
}
