use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use price_chart::api::{ChartEngine, ChartEngineConfig};
use price_chart::core::{PriceRecord, Series};
use price_chart::extensions::{ChartContext, ChartEvent, ChartListener};
use price_chart::interaction::ChartKind;
use price_chart::render::NullRenderer;

#[derive(Clone)]
struct RecordingListener {
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl ChartListener for RecordingListener {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: &ChartEvent, _context: ChartContext) {
        self.events.borrow_mut().push(event.clone());
    }
}

fn series() -> Series {
    let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).expect("date");
    Series::new(vec![
        PriceRecord::new(date(1), 10.0, 12.0, 9.0, 11.0).expect("record"),
        PriceRecord::new(date(2), 11.0, 13.0, 10.0, 12.5).expect("record"),
    ])
    .expect("series")
}

fn engine_with_recorder() -> (ChartEngine<NullRenderer>, Rc<RefCell<Vec<ChartEvent>>>) {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine.set_series(series());
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener {
            events: Rc::clone(&events),
        }))
        .expect("register listener");
    (engine, events)
}

fn hover_events(events: &[ChartEvent]) -> Vec<&ChartEvent> {
    events
        .iter()
        .filter(|event| matches!(event, ChartEvent::Hover(_) | ChartEvent::HoverClear))
        .collect()
}

#[test]
fn entering_a_marker_publishes_hover_with_tooltip() {
    let (mut engine, events) = engine_with_recorder();

    // First marker sits at (60, 300).
    engine.pointer_move(61.0, 301.0);

    let hover = engine.active_hover().copied().expect("hovered");
    assert_eq!(hover.record_index, 0);
    assert_eq!(hover.chart_kind, ChartKind::Line);
    assert_eq!(hover.open(), None);
    assert_relative_eq!(hover.close(), 11.0);

    let tooltip = engine.tooltip().expect("tooltip");
    assert_eq!(tooltip.text, "2024-01-01: 11");
    assert_relative_eq!(tooltip.x, 71.0);
    assert_relative_eq!(tooltip.y, 311.0);
    assert_eq!(hover_events(&events.borrow()).len(), 1);
}

#[test]
fn moving_within_a_target_publishes_nothing_more() {
    let (mut engine, events) = engine_with_recorder();
    engine.pointer_move(60.0, 300.0);
    engine.pointer_move(62.0, 302.0);
    engine.pointer_move(58.0, 298.0);

    assert_eq!(hover_events(&events.borrow()).len(), 1);
}

#[test]
fn leaving_a_target_publishes_hover_clear() {
    let (mut engine, events) = engine_with_recorder();
    engine.pointer_move(60.0, 300.0);
    engine.pointer_move(500.0, 500.0);
    engine.pointer_leave();

    let recorded = events.borrow();
    let hover = hover_events(&recorded);
    assert_eq!(hover.len(), 2);
    assert!(matches!(hover[1], ChartEvent::HoverClear));
    assert!(engine.tooltip().is_none());
}

#[test]
fn pointer_leave_without_hover_is_silent() {
    let (mut engine, events) = engine_with_recorder();
    engine.pointer_leave();
    engine.pointer_move(500.0, 500.0);
    assert!(hover_events(&events.borrow()).is_empty());
}

#[test]
fn jumping_between_targets_clears_then_hovers() {
    let (mut engine, events) = engine_with_recorder();
    engine.pointer_move(60.0, 300.0);
    engine.pointer_move(940.0, 120.0);

    let recorded = events.borrow();
    let hover = hover_events(&recorded);
    assert_eq!(hover.len(), 3);
    assert!(matches!(hover[1], ChartEvent::HoverClear));
    assert!(matches!(hover[2], ChartEvent::Hover(event) if event.record_index == 1));
}

#[test]
fn candlestick_tooltip_reports_open_and_close() {
    let (mut engine, _events) = engine_with_recorder();
    engine.set_chart_kind(ChartKind::Candlestick);

    // First body spans x 55..65, y 300..420.
    engine.pointer_move(60.0, 350.0);
    let hover = engine.active_hover().copied().expect("hovered");
    assert_eq!(hover.open(), Some(10.0));
    assert_eq!(
        engine.tooltip().expect("tooltip").text,
        "2024-01-01: open 10, close 11"
    );
}

#[test]
fn bar_hover_covers_the_whole_bar() {
    let (mut engine, _events) = engine_with_recorder();
    engine.set_chart_kind(ChartKind::Bar);

    engine.pointer_move(900.0, 530.0);
    let hover = engine.active_hover().copied().expect("hovered");
    assert_eq!(hover.record_index, 1);
    assert_eq!(
        engine.tooltip().expect("tooltip").text,
        "2024-01-02: 12.5"
    );
}

#[test]
fn rebuilding_the_scene_drops_the_active_hover() {
    let (mut engine, events) = engine_with_recorder();
    engine.pointer_move(60.0, 300.0);
    engine.toggle_grid();

    assert!(engine.active_hover().is_none());
    let recorded = events.borrow();
    let hover = hover_events(&recorded);
    assert!(matches!(hover.last(), Some(ChartEvent::HoverClear)));
}

#[test]
fn pointer_outside_an_empty_chart_never_hovers() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine.pointer_move(60.0, 300.0);
    assert!(engine.active_hover().is_none());
    assert!(engine.tooltip().is_none());
}

#[test]
fn pending_kind_change_keeps_hover_in_drawn_kind() {
    let config = ChartEngineConfig::default().with_auto_render(false);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(series());
    engine.render().expect("render");

    engine.pointer_move(60.0, 300.0);
    assert_eq!(engine.tooltip().expect("tooltip").text, "2024-01-01: 11");

    engine.set_chart_kind(ChartKind::Candlestick);
    assert_eq!(engine.scene_chart_kind(), ChartKind::Line);

    // Same line marker, re-entered before the pending rebuild.
    engine.pointer_leave();
    engine.pointer_move(60.0, 300.0);
    let hover = engine.active_hover().copied().expect("hovered");
    assert_eq!(hover.chart_kind, ChartKind::Line);
    assert_eq!(hover.open(), None);
    assert_eq!(engine.tooltip().expect("tooltip").text, "2024-01-01: 11");

    assert!(engine.render_if_invalidated().expect("render"));
    assert_eq!(engine.scene_chart_kind(), ChartKind::Candlestick);
    assert!(engine.active_hover().is_none());

    // First body spans x 55..65, y 300..420.
    engine.pointer_move(60.0, 350.0);
    assert_eq!(
        engine.tooltip().expect("tooltip").text,
        "2024-01-01: open 10, close 11"
    );
}

#[test]
fn flat_candle_body_is_still_hoverable() {
    let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).expect("date");
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine.set_series(
        Series::new(vec![
            PriceRecord::new(date(1), 10.0, 12.0, 9.0, 11.0).expect("record"),
            PriceRecord::new(date(2), 12.0, 13.0, 10.0, 12.0).expect("doji"),
        ])
        .expect("series"),
    );
    engine.set_chart_kind(ChartKind::Candlestick);

    // Doji body collapses onto y(12) = 180.
    engine.pointer_move(940.0, 182.0);
    let hover = engine.active_hover().copied().expect("hovered");
    assert_eq!(hover.record_index, 1);
    assert_eq!(
        engine.tooltip().expect("tooltip").text,
        "2024-01-02: open 12, close 12"
    );
}

#[test]
fn bar_closing_on_the_baseline_is_still_hoverable() {
    let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).expect("date");
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine.set_series(
        Series::new(vec![
            PriceRecord::new(date(1), 10.0, 12.0, 9.0, 9.0).expect("record"),
            PriceRecord::new(date(2), 11.0, 13.0, 10.0, 12.5).expect("record"),
        ])
        .expect("series"),
    );
    engine.set_chart_kind(ChartKind::Bar);

    engine.pointer_move(100.0, 538.0);
    let hover = engine.active_hover().copied().expect("hovered");
    assert_eq!(hover.record_index, 0);
    assert_relative_eq!(hover.close(), 9.0);
}
