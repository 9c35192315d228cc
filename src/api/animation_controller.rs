use std::time::Duration;

use tracing::trace;

use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Linear animation progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.tween.progress()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tween.is_complete()
    }

    /// Sets animation progress directly from an external clock.
    pub fn set_progress(&mut self, progress: f64) {
        self.tween.set_progress(progress);
        trace!(progress = self.tween.progress(), "animation progress set");
    }

    /// Advances the animation by wall-clock time and returns the new progress.
    pub fn advance(&mut self, elapsed: Duration) -> f64 {
        let progress = self
            .tween
            .advance(elapsed, self.config.animation_duration());
        trace!(
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            progress,
            "animation advanced"
        );
        progress
    }

    pub fn finish_animation(&mut self) {
        self.tween.set_progress(1.0);
    }
}
