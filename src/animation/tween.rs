use std::time::Duration;

use crate::animation::{Curve, interpolate};
use crate::core::LineChartData;

/// Explicit animation state between two snapshots.
///
/// `progress` is linear clock progress; the easing curve is applied only when
/// evaluating, so evaluation stays a pure function of `(begin, end, t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotTween {
    begin: LineChartData,
    end: LineChartData,
    progress: f64,
}

impl SnapshotTween {
    /// A finished tween resting on `data`.
    #[must_use]
    pub fn settled(data: LineChartData) -> Self {
        Self {
            begin: data.clone(),
            end: data,
            progress: 1.0,
        }
    }

    #[must_use]
    pub fn begin(&self) -> &LineChartData {
        &self.begin
    }

    #[must_use]
    pub fn end(&self) -> &LineChartData {
        &self.end
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets linear progress, clamped to `[0, 1]`. NaN completes the tween.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    /// Integrates clock time over an animation of length `duration`.
    pub fn advance(&mut self, elapsed: Duration, duration: Duration) -> f64 {
        if duration.is_zero() {
            self.progress = 1.0;
        } else {
            let step = elapsed.as_secs_f64() / duration.as_secs_f64();
            self.set_progress(self.progress + step);
        }
        self.progress
    }

    #[must_use]
    pub fn evaluate(&self, curve: Curve) -> LineChartData {
        interpolate(&self.begin, &self.end, curve.transform(self.progress))
    }

    /// Starts a new animation from the currently blended state towards `end`.
    ///
    /// An unfinished animation is superseded; nothing needs cancelling.
    pub fn retarget(&mut self, end: LineChartData, curve: Curve) {
        self.begin = self.evaluate(curve);
        self.end = end;
        self.progress = 0.0;
    }
}
