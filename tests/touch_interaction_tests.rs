use std::sync::{Arc, Mutex};

use linechart_rs::api::{LineChartConfig, LineChartEngine};
use linechart_rs::core::{
    DataPoint, LineChartData, LineSeries, LineTouchData, TouchCallback, TouchEvent,
    TouchEventKind, TouchResponse, TouchedSpot,
};
use linechart_rs::interaction::InteractionMode;
use linechart_rs::render::NullRenderer;

fn series(points: &[(f64, f64)]) -> LineSeries {
    LineSeries::new(points.iter().map(|&(x, y)| DataPoint::new(x, y)).collect())
}

fn chart_data() -> LineChartData {
    LineChartData::new(vec![
        series(&[(0.0, 2.0), (0.5, 3.0), (1.0, 5.0)]),
        series(&[(1.0, 9.0), (2.0, 8.0)]),
    ])
}

fn build_engine(data: LineChartData) -> LineChartEngine<NullRenderer> {
    LineChartEngine::new(NullRenderer::default(), LineChartConfig::default(), data)
        .expect("engine init")
}

fn hover() -> TouchEvent {
    TouchEvent::new(TouchEventKind::PointerHover, 10.0, 20.0)
}

fn two_spot_response() -> TouchResponse {
    TouchResponse::new(vec![
        TouchedSpot::new(0, 2, 1.0, 5.0),
        TouchedSpot::new(1, 0, 1.0, 9.0),
    ])
}

#[test]
fn touched_spots_are_stacked_by_descending_y() {
    let mut engine = build_engine(chart_data());
    engine.handle_touch(&hover(), Some(&two_spot_response()));

    assert_eq!(engine.interaction_mode(), InteractionMode::Selecting);
    let groups = engine.tooltip_groups();
    assert_eq!(groups.len(), 1);
    let order: Vec<(usize, f64)> = groups[0]
        .spots
        .iter()
        .map(|spot| (spot.series_index, spot.y))
        .collect();
    assert_eq!(order, vec![(1, 9.0), (0, 5.0)]);

    assert_eq!(engine.indicators().len(), 2);
    assert_eq!(engine.indicators()[&1].as_slice(), &[0]);
    assert_eq!(engine.indicators()[&0].as_slice(), &[2]);
    assert_eq!(engine.remembered_spots(), groups[0].spots.as_slice());
}

#[test]
fn new_touch_replaces_previous_selection() {
    let mut engine = build_engine(chart_data());
    engine.handle_touch(&hover(), Some(&two_spot_response()));

    let next = TouchResponse::new(vec![TouchedSpot::new(0, 0, 0.0, 2.0)]);
    engine.handle_touch(&hover(), Some(&next));

    assert_eq!(engine.tooltip_groups().len(), 1);
    assert_eq!(engine.tooltip_groups()[0].spots, next.touched_spots);
    assert_eq!(engine.indicators().len(), 1);
    assert_eq!(engine.indicators()[&0].as_slice(), &[0]);
}

#[test]
fn release_event_returns_to_idle() {
    let mut engine = build_engine(chart_data());
    engine.handle_touch(&hover(), Some(&two_spot_response()));

    let release = TouchEvent::new(TouchEventKind::PanEnd, 10.0, 20.0);
    engine.handle_touch(&release, Some(&two_spot_response()));

    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(engine.remembered_spots().is_empty());
    assert!(engine.indicators().is_empty());
    assert!(engine.tooltip_groups().is_empty());
}

#[test]
fn missing_or_empty_response_returns_to_idle() {
    let mut engine = build_engine(chart_data());

    engine.handle_touch(&hover(), Some(&two_spot_response()));
    engine.handle_touch(&hover(), None);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);

    engine.handle_touch(&hover(), Some(&two_spot_response()));
    engine.handle_touch(&hover(), Some(&TouchResponse::default()));
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(engine.indicators().is_empty());
}

#[test]
fn clear_touches_always_idles() {
    let mut engine = build_engine(chart_data());
    engine.clear_touches();
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);

    engine.handle_touch(&hover(), Some(&two_spot_response()));
    engine.clear_touches();
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(engine.remembered_spots().is_empty());
    assert!(engine.indicators().is_empty());
}

#[test]
fn spots_outside_chart_data_clear_selection() {
    let mut engine = build_engine(chart_data());
    engine.handle_touch(&hover(), Some(&two_spot_response()));

    let stale = TouchResponse::new(vec![TouchedSpot::new(5, 0, 1.0, 1.0)]);
    engine.handle_touch(&hover(), Some(&stale));
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);

    let stale_point = TouchResponse::new(vec![TouchedSpot::new(1, 7, 1.0, 1.0)]);
    engine.handle_touch(&hover(), Some(&stale_point));
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn host_callback_is_notified_before_bookkeeping() {
    let seen: Arc<Mutex<Vec<(TouchEventKind, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback = TouchCallback::new(move |event, response| {
        let count = response.map_or(0, |response| response.touched_spots.len());
        sink.lock().expect("lock").push((event.kind, count));
    });
    let data = chart_data().with_touch(LineTouchData::default().with_callback(callback));
    let mut engine = build_engine(data);

    engine.handle_touch(&hover(), Some(&two_spot_response()));
    engine.handle_touch(&TouchEvent::new(TouchEventKind::TapUp, 0.0, 0.0), None);

    let seen = seen.lock().expect("lock");
    assert_eq!(
        *seen,
        vec![
            (TouchEventKind::PointerHover, 2),
            (TouchEventKind::TapUp, 0)
        ]
    );
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn logical_data_withholds_callback_only_under_built_in_handling() {
    let callback = TouchCallback::new(|_, _| {});

    let built_in = chart_data().with_touch(LineTouchData::default().with_callback(callback.clone()));
    let engine = build_engine(built_in);
    assert!(engine.logical_data().touch.callback.is_none());
    assert!(engine.source_data().touch.callback.is_some());

    let host_only = chart_data().with_touch(
        LineTouchData::default()
            .with_built_in_touches(false)
            .with_callback(callback.clone()),
    );
    let engine = build_engine(host_only);
    assert_eq!(engine.logical_data().touch.callback, Some(callback));
}

#[test]
fn host_only_handling_notifies_without_selecting() {
    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);
    let callback = TouchCallback::new(move |_, _| {
        *counter.lock().expect("lock") += 1;
    });
    let data = chart_data().with_touch(
        LineTouchData::default()
            .with_built_in_touches(false)
            .with_callback(callback),
    );
    let mut engine = build_engine(data);

    engine.handle_touch(&hover(), Some(&two_spot_response()));

    assert_eq!(*calls.lock().expect("lock"), 1);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn disabled_touch_ignores_events_entirely() {
    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);
    let callback = TouchCallback::new(move |_, _| {
        *counter.lock().expect("lock") += 1;
    });
    let mut touch = LineTouchData::disabled();
    touch.callback = Some(callback);
    let mut engine = build_engine(chart_data().with_touch(touch));

    engine.handle_touch(&hover(), Some(&two_spot_response()));

    assert_eq!(*calls.lock().expect("lock"), 0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn indicators_overlay_is_noop_when_touch_disabled() {
    let mut engine = build_engine(chart_data());
    engine.handle_touch(&hover(), Some(&two_spot_response()));

    let disabled = chart_data()
        .with_touch(LineTouchData::disabled())
        .with_series(vec![series(&[(1.0, 5.0)]).with_showing_indicators(vec![0])]);
    assert_eq!(engine.with_indicators_applied(&disabled), disabled);

    let host_only = chart_data().with_touch(LineTouchData::default().with_built_in_touches(false));
    assert_eq!(engine.with_indicators_applied(&host_only), host_only);
}

#[test]
fn indicators_overlay_resets_unselected_series() {
    let mut engine = build_engine(chart_data());
    let response = TouchResponse::new(vec![TouchedSpot::new(1, 1, 2.0, 8.0)]);
    engine.handle_touch(&hover(), Some(&response));

    let input = LineChartData::new(vec![
        series(&[(0.0, 2.0), (0.5, 3.0), (1.0, 5.0)]).with_showing_indicators(vec![0, 1]),
        series(&[(1.0, 9.0), (2.0, 8.0)]),
    ]);
    let applied = engine.with_indicators_applied(&input);

    assert!(applied.series[0].showing_indicators.is_empty());
    assert_eq!(applied.series[1].showing_indicators, vec![1]);
    assert_eq!(applied.showing_tooltip_indicators.len(), 1);
    assert_eq!(applied.showing_tooltip_indicators[0].spots, response.touched_spots);
}
