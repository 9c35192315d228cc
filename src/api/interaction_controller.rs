use tracing::{debug, trace, warn};

use crate::core::{TooltipGroup, TouchEvent, TouchResponse, TouchedSpot};
use crate::interaction::{IndicatorMap, InteractionMode, TouchSelectionState};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.selection.mode()
    }

    #[must_use]
    pub fn selection(&self) -> &TouchSelectionState {
        &self.selection
    }

    #[must_use]
    pub fn indicators(&self) -> &IndicatorMap {
        self.selection.indicators()
    }

    #[must_use]
    pub fn tooltip_groups(&self) -> &[TooltipGroup] {
        self.selection.tooltip_groups()
    }

    #[must_use]
    pub fn remembered_spots(&self) -> &[TouchedSpot] {
        self.selection.remembered_spots()
    }

    /// Handles one pointer event together with its hit-test result.
    ///
    /// The host callback is notified first, whatever the outcome. Then, with
    /// built-in handling active, an interested event with touched spots
    /// replaces the selection and anything else clears it.
    ///
    /// Exception: while the source snapshot has touch disabled the event is
    /// dropped before anything runs, so the host callback is not called
    /// either.
    pub fn handle_touch(&mut self, event: &TouchEvent, response: Option<&TouchResponse>) {
        if !self.source.touch.enabled {
            trace!(kind = ?event.kind, "touch disabled; ignoring event");
            return;
        }

        if let Some(callback) = &self.external_callback {
            callback.call(event, response);
        }

        if !self.source.touch.handle_built_in_touches {
            return;
        }

        let spots = match response {
            Some(response)
                if event.is_interested_for_interactions()
                    && !response.touched_spots.is_empty() =>
            {
                &response.touched_spots
            }
            _ => {
                if self.selection.mode() == InteractionMode::Selecting {
                    debug!(kind = ?event.kind, "touch released; clearing selection");
                }
                self.selection.clear();
                return;
            }
        };

        if let Some(spot) = spots.iter().find(|spot| !self.is_known_spot(spot)) {
            warn!(
                series_index = spot.series_index,
                spot_index = spot.spot_index,
                "touched spot does not exist in chart data; clearing selection"
            );
            self.selection.clear();
            return;
        }

        self.selection.select(spots.clone());
        debug!(
            spots = spots.len(),
            kind = ?event.kind,
            "touch selection replaced"
        );
    }

    /// Drops the selection regardless of state.
    pub fn clear_touches(&mut self) {
        if self.selection.mode() == InteractionMode::Selecting {
            debug!("touch selection cleared by host");
        }
        self.selection.clear();
    }

    fn is_known_spot(&self, spot: &TouchedSpot) -> bool {
        self.tween
            .end()
            .series
            .get(spot.series_index)
            .is_some_and(|series| spot.spot_index < series.points.len())
    }
}
