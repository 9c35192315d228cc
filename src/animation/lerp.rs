//! Pure blending of two chart snapshots.
//!
//! Numeric geometry and styling are tweened; everything else (flags,
//! callbacks, indicator lists, tooltip groups) switches to the end value.

use crate::core::{ChartBounds, Color, DataPoint, LineChartData, LineSeries};

/// Linear blend towards `end` at progress `t`.
///
/// `t <= 0` returns `begin` and `t >= 1` (or NaN) returns `end` verbatim, so
/// the endpoints hold exactly despite floating-point rounding.
#[must_use]
pub fn lerp_f64(begin: f64, end: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return begin;
    }
    if t >= 1.0 || t.is_nan() {
        return end;
    }
    begin + (end - begin) * t
}

pub trait Lerp {
    #[must_use]
    fn lerp(&self, end: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        lerp_f64(*self, *end, t)
    }
}

impl Lerp for DataPoint {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        if self.is_null() || end.is_null() {
            return *end;
        }
        Self::new(lerp_f64(self.x, end.x, t), lerp_f64(self.y, end.y, t))
    }
}

impl Lerp for Color {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        Self::rgba(
            lerp_f64(self.red, end.red, t),
            lerp_f64(self.green, end.green, t),
            lerp_f64(self.blue, end.blue, t),
            lerp_f64(self.alpha, end.alpha, t),
        )
    }
}

impl Lerp for ChartBounds {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        Self::new(
            lerp_f64(self.min_x, end.min_x, t),
            lerp_f64(self.max_x, end.max_x, t),
            lerp_f64(self.min_y, end.min_y, t),
            lerp_f64(self.max_y, end.max_y, t),
        )
    }
}

impl Lerp for LineSeries {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        // Points pair by index; an end point with no counterpart stays put.
        let points = end
            .points
            .iter()
            .enumerate()
            .map(|(index, end_point)| {
                let begin_point = self.points.get(index).unwrap_or(end_point);
                begin_point.lerp(end_point, t)
            })
            .collect();

        Self {
            points,
            showing_indicators: end.showing_indicators.clone(),
            color: self.color.lerp(&end.color, t),
            stroke_width: lerp_f64(self.stroke_width, end.stroke_width, t),
            visible: end.visible,
        }
    }
}

impl Lerp for LineChartData {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        interpolate(self, end, t)
    }
}

/// Blends `begin` towards `end` at progress `t`.
///
/// Series are paired by position. A series of `end` with no counterpart in
/// `begin` is blended with itself, so it appears unchanged for every `t`.
#[must_use]
pub fn interpolate(begin: &LineChartData, end: &LineChartData, t: f64) -> LineChartData {
    let series = end
        .series
        .iter()
        .enumerate()
        .map(|(index, end_series)| {
            let begin_series = begin.series.get(index).unwrap_or(end_series);
            begin_series.lerp(end_series, t)
        })
        .collect();

    let bounds = match (begin.bounds, end.bounds) {
        (Some(begin_bounds), Some(end_bounds)) => Some(begin_bounds.lerp(&end_bounds, t)),
        _ => end.bounds,
    };

    LineChartData {
        series,
        touch: end.touch.clone(),
        showing_tooltip_indicators: end.showing_tooltip_indicators.clone(),
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::lerp_f64;

    #[test]
    fn scalar_endpoints_are_exact() {
        assert_eq!(lerp_f64(0.1, 0.3, 1.0), 0.3);
        assert_eq!(lerp_f64(0.1, 0.3, 0.0), 0.1);
        assert_eq!(lerp_f64(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp_f64(2.0, 4.0, f64::NAN), 4.0);
    }
}
