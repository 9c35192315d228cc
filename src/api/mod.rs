mod animation_controller;
mod data_controller;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod snapshot_controller;
mod validation;

pub use engine_config::LineChartConfig;
pub use engine_snapshot::EngineSnapshot;

use tracing::debug;

use crate::animation::SnapshotTween;
use crate::core::{LineChartData, TouchCallback};
use crate::error::ChartResult;
use crate::interaction::TouchSelectionState;
use crate::render::Renderer;

use validation::validate_config;

/// Stateful facade tying snapshots, animation and touch selection together.
///
/// Mutation happens only in two triggers, each run to completion before the
/// next read: data updates (`set_data`) and touch events (`handle_touch`,
/// `clear_touches`). Advancing animation progress never touches selection
/// state. The engine is single-threaded; a multi-threaded host should wrap
/// the whole engine in one mutex.
pub struct LineChartEngine<R: Renderer> {
    renderer: R,
    config: LineChartConfig,
    source: LineChartData,
    external_callback: Option<TouchCallback>,
    selection: TouchSelectionState,
    tween: SnapshotTween,
}

impl<R: Renderer> LineChartEngine<R> {
    pub fn new(renderer: R, config: LineChartConfig, data: LineChartData) -> ChartResult<Self> {
        let config = validate_config(config)?;
        let external_callback = data.touch.callback.clone();

        let mut engine = Self {
            renderer,
            config,
            source: data,
            external_callback,
            selection: TouchSelectionState::default(),
            tween: SnapshotTween::settled(LineChartData::default()),
        };
        engine.tween = SnapshotTween::settled(engine.logical_data());
        debug!(
            series = engine.source.series.len(),
            duration_ms = engine.config.animation_duration_ms,
            "line chart engine created"
        );
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> LineChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: LineChartConfig) -> ChartResult<()> {
        self.config = validate_config(config)?;
        Ok(())
    }

    /// Controls whether the next data builds discard the touch selection
    /// instead of reconciling it.
    pub fn set_force_clear_touches(&mut self, force_clear_touches: bool) {
        self.config.force_clear_touches = force_clear_touches;
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
