use crate::core::{Color, LineChartData};
use crate::error::{ChartError, ChartResult};

/// Both snapshots the renderer needs for one draw pass.
///
/// `current` is the blended state to draw; `target` is where the animation is
/// heading, for consumers that lay out labels against final positions.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub current: LineChartData,
    pub target: LineChartData,
    pub progress: f64,
}

impl RenderFrame {
    #[must_use]
    pub fn new(current: LineChartData, target: LineChartData, progress: f64) -> Self {
        Self {
            current,
            target,
            progress,
        }
    }

    /// Rejects non-finite geometry and styling.
    ///
    /// Index references are not checked: stale indicator or tooltip indexes
    /// are tolerated and simply draw nothing.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.progress.is_finite() || !(0.0..=1.0).contains(&self.progress) {
            return Err(ChartError::InvalidData(
                "frame progress must be finite and in [0, 1]".to_owned(),
            ));
        }
        validate_data(&self.current, "current")?;
        validate_data(&self.target, "target")
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }
}

fn validate_data(data: &LineChartData, label: &str) -> ChartResult<()> {
    for (series_index, series) in data.series.iter().enumerate() {
        let finite_points = series
            .points
            .iter()
            .all(|point| point.is_null() || (point.x.is_finite() && point.y.is_finite()));
        if !finite_points {
            return Err(ChartError::InvalidData(format!(
                "{label} series {series_index} has non-finite points"
            )));
        }
        if !series.stroke_width.is_finite() || series.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{label} series {series_index} stroke width must be finite and >= 0"
            )));
        }
        validate_color(series.color, label, series_index)?;
    }

    if let Some(bounds) = data.bounds {
        let finite = [bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y]
            .iter()
            .all(|value| value.is_finite());
        if !finite {
            return Err(ChartError::InvalidData(format!(
                "{label} bounds must be finite"
            )));
        }
    }
    Ok(())
}

fn validate_color(color: Color, label: &str, series_index: usize) -> ChartResult<()> {
    for (channel, value) in [
        ("red", color.red),
        ("green", color.green),
        ("blue", color.blue),
        ("alpha", color.alpha),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ChartError::InvalidData(format!(
                "{label} series {series_index} color channel `{channel}` must be in [0, 1]"
            )));
        }
    }
    Ok(())
}
