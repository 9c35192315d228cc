//! Touch-selection bookkeeping: what is selected, which indicators and
//! tooltips follow from it, and how that survives data updates.

mod reconcile;

use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{TooltipGroup, TouchedSpot};

pub use reconcile::{Reconciliation, reconcile};

/// Point indexes flagged on one series.
pub type IndicatorIndexes = SmallVec<[usize; 2]>;

/// Series index to flagged point indexes, in insertion order.
pub type IndicatorMap = IndexMap<usize, IndicatorIndexes>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Selecting,
}

/// Selection state owned by the engine for its whole lifetime.
///
/// Every transition builds a complete replacement value, so a reader never
/// sees indicators from one selection next to tooltips from another.
/// Indicators are only ever present while at least one tooltip group is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchSelectionState {
    remembered_spots: Vec<TouchedSpot>,
    indicators: IndicatorMap,
    tooltip_groups: Vec<TooltipGroup>,
}

impl TouchSelectionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.tooltip_groups.is_empty() {
            InteractionMode::Idle
        } else {
            InteractionMode::Selecting
        }
    }

    #[must_use]
    pub fn remembered_spots(&self) -> &[TouchedSpot] {
        &self.remembered_spots
    }

    #[must_use]
    pub fn indicators(&self) -> &IndicatorMap {
        &self.indicators
    }

    /// Indicator indexes for one series; empty when the series has none.
    #[must_use]
    pub fn indicators_for(&self, series_index: usize) -> &[usize] {
        self.indicators
            .get(&series_index)
            .map(|indexes| indexes.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn tooltip_groups(&self) -> &[TooltipGroup] {
        &self.tooltip_groups
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replaces the selection with `spots`, highest `y` first.
    ///
    /// Ties keep arrival order. The order is the tooltip stacking order. With
    /// several spots on one series the last one in sorted order wins.
    pub fn select(&mut self, mut spots: Vec<TouchedSpot>) {
        if spots.is_empty() {
            self.clear();
            return;
        }

        spots.sort_by_key(|spot| Reverse(OrderedFloat(spot.y)));

        let mut indicators = IndicatorMap::with_capacity(spots.len());
        for spot in &spots {
            indicators.insert(spot.series_index, smallvec![spot.spot_index]);
        }

        *self = Self {
            tooltip_groups: vec![TooltipGroup::new(spots.clone())],
            remembered_spots: spots,
            indicators,
        };
    }

    /// Applies a reconciliation pass against new data.
    ///
    /// A pass that asks for tooltips to be cleared drops the whole selection.
    pub fn apply(&mut self, reconciliation: Reconciliation) {
        if reconciliation.should_clear_tooltips {
            self.clear();
            return;
        }
        if self.tooltip_groups.is_empty() {
            self.indicators = IndicatorMap::new();
            return;
        }
        self.indicators = reconciliation.indicators;
    }
}
