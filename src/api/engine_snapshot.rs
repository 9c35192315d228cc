use serde::{Deserialize, Serialize};

use crate::core::LineChartData;
use crate::interaction::{InteractionMode, TouchSelectionState};

/// Serializable engine state for regression tests and debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub interaction_mode: InteractionMode,
    pub progress: f64,
    pub selection: TouchSelectionState,
    pub target: LineChartData,
}
