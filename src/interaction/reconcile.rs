use smallvec::smallvec;
use tracing::trace;

use crate::core::{LineChartData, LineSeries, TouchedSpot};

use super::IndicatorMap;

/// Outcome of matching a remembered selection against new data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconciliation {
    pub indicators: IndicatorMap,
    pub should_clear_tooltips: bool,
}

/// Re-derives indicators for `remembered` spots against `data`.
///
/// Matching is exact `(x, y)` equality with a linear scan.
///
/// - When the series count equals the number of remembered spots, spot `i` is
///   looked up in series `i` only and maps to `{i: [point index]}`.
/// - Otherwise each spot is looked up across all series in order and maps to
///   `{i: [first matching series index]}`.
///
/// A single spot without a match sets `should_clear_tooltips`; indicators for
/// the spots that did match are still reported.
#[must_use]
pub fn reconcile(data: &LineChartData, remembered: &[TouchedSpot]) -> Reconciliation {
    if remembered.is_empty() {
        return Reconciliation::default();
    }

    let reconciliation = if data.series.len() == remembered.len() {
        reconcile_aligned(&data.series, remembered)
    } else {
        reconcile_unaligned(&data.series, remembered)
    };

    trace!(
        remembered = remembered.len(),
        series = data.series.len(),
        matched = reconciliation.indicators.len(),
        should_clear_tooltips = reconciliation.should_clear_tooltips,
        "reconciled touch selection"
    );
    reconciliation
}

fn reconcile_aligned(series: &[LineSeries], remembered: &[TouchedSpot]) -> Reconciliation {
    let mut result = Reconciliation::default();
    for (index, (line, spot)) in series.iter().zip(remembered).enumerate() {
        match line.position_of(spot.x, spot.y) {
            Some(point_index) => {
                result.indicators.insert(index, smallvec![point_index]);
            }
            None => result.should_clear_tooltips = true,
        }
    }
    result
}

fn reconcile_unaligned(series: &[LineSeries], remembered: &[TouchedSpot]) -> Reconciliation {
    let mut result = Reconciliation::default();
    for (index, spot) in remembered.iter().enumerate() {
        let matching_series = series
            .iter()
            .position(|line| line.position_of(spot.x, spot.y).is_some());
        match matching_series {
            Some(series_index) => {
                result.indicators.insert(index, smallvec![series_index]);
            }
            None => result.should_clear_tooltips = true,
        }
    }
    result
}
