use tracing::debug;

use crate::core::LineChartData;
use crate::interaction::{InteractionMode, reconcile};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Snapshot last supplied by the host, callback included.
    #[must_use]
    pub fn source_data(&self) -> &LineChartData {
        &self.source
    }

    /// Snapshot the animation is heading to.
    #[must_use]
    pub fn target_data(&self) -> &LineChartData {
        self.tween.end()
    }

    /// The host's snapshot as the engine works with it.
    ///
    /// With built-in touch handling active the host callback is held by the
    /// engine instead, and `handle_touch` notifies it before doing its own
    /// bookkeeping, so the logical snapshot carries no callback.
    #[must_use]
    pub fn logical_data(&self) -> LineChartData {
        let mut logical = self.source.clone();
        if logical.touch.uses_built_in_handling() {
            logical.touch.callback = None;
        }
        logical
    }

    /// Replaces chart data and animates towards it.
    ///
    /// The touch selection is reconciled against the new data (or discarded
    /// when `force_clear_touches` is set) before the animation is retargeted.
    /// An animation still in flight restarts from its current blended state.
    pub fn set_data(&mut self, data: LineChartData) {
        self.external_callback = data.touch.callback.clone();
        self.source = data;

        let logical = self.logical_data();
        self.on_build_frame(&logical, self.config.force_clear_touches);

        if logical == *self.tween.end() {
            return;
        }
        self.tween.retarget(logical, self.config.animation_curve);
        if self.config.animation_duration_ms == 0 {
            self.tween.set_progress(1.0);
        }
        debug!(
            series = self.tween.end().series.len(),
            points = self.tween.end().point_count(),
            "retargeted chart animation"
        );
    }

    /// Brings the touch selection in line with `logical`.
    pub fn on_build_frame(&mut self, logical: &LineChartData, should_force_clear: bool) {
        if should_force_clear {
            if self.selection.mode() == InteractionMode::Selecting {
                debug!("force-clearing touch selection on build");
            }
            self.selection.clear();
            return;
        }

        let reconciliation = reconcile(logical, self.selection.remembered_spots());
        if reconciliation.should_clear_tooltips {
            debug!(
                remembered = self.selection.remembered_spots().len(),
                "selected spots no longer present in data; clearing tooltips"
            );
        }
        self.selection.apply(reconciliation);
    }
}
