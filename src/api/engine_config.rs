use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Curve;
use crate::error::{ChartError, ChartResult};

use super::validation::validate_config;

/// Construction-time options of the engine.
///
/// Serializable so hosts can persist chart setup alongside their own state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    /// Length of one data-change animation. Zero jumps straight to the target.
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub animation_curve: Curve,
    /// Discard the touch selection on every data build instead of
    /// reconciling it.
    #[serde(default)]
    pub force_clear_touches: bool,
}

fn default_animation_duration_ms() -> u64 {
    150
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: default_animation_duration_ms(),
            animation_curve: Curve::default(),
            force_clear_touches: false,
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_animation_curve(mut self, curve: Curve) -> Self {
        self.animation_curve = curve;
        self
    }

    #[must_use]
    pub fn with_force_clear_touches(mut self, force_clear_touches: bool) -> Self {
        self.force_clear_touches = force_clear_touches;
        self
    }

    #[must_use]
    pub fn animation_duration(self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        validate_config(config)
    }
}
