use tracing::trace;

use crate::core::LineChartData;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::{EngineSnapshot, LineChartEngine};

impl<R: Renderer> LineChartEngine<R> {
    /// Overlays the current selection onto `data`.
    ///
    /// Without built-in touch handling `data` comes back unchanged. Otherwise
    /// tooltip groups are replaced and every series gets its indicator list
    /// from the selection, empty when it has none.
    #[must_use]
    pub fn with_indicators_applied(&self, data: &LineChartData) -> LineChartData {
        if !data.touch.uses_built_in_handling() {
            return data.clone();
        }

        let series = data
            .series
            .iter()
            .enumerate()
            .map(|(index, series)| {
                series
                    .clone()
                    .with_showing_indicators(self.selection.indicators_for(index).to_vec())
            })
            .collect();

        LineChartData {
            series,
            touch: data.touch.clone(),
            showing_tooltip_indicators: self.selection.tooltip_groups().to_vec(),
            bounds: data.bounds,
        }
    }

    /// Blended and target snapshots for the current progress, selection applied.
    ///
    /// Pure with respect to engine state; safe to call on every clock tick.
    #[must_use]
    pub fn current_frame(&self) -> RenderFrame {
        let current = self.tween.evaluate(self.config.animation_curve);
        RenderFrame::new(
            self.with_indicators_applied(&current),
            self.with_indicators_applied(self.tween.end()),
            self.tween.progress(),
        )
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.current_frame();
        self.renderer.render(&frame)?;
        trace!(progress = frame.progress, "rendered frame");
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            interaction_mode: self.selection.mode(),
            progress: self.tween.progress(),
            selection: self.selection.clone(),
            target: self.with_indicators_applied(self.tween.end()),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
