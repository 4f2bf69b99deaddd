use std::cell::RefCell;
use std::rc::Rc;

use price_chart::api::{ChartEngine, ChartEngineConfig};
use price_chart::extensions::{ChartContext, ChartEvent, ChartListener, ViewStateChange};
use price_chart::interaction::{ChartKind, SidebarControl, ViewState};
use price_chart::render::{CanvasLayerKind, NullRenderer};

const RECORDS_JSON: &str = r#"[
    {"date": "2024-01-01", "open": 10, "high": 12, "low": 9, "close": 11},
    {"date": "2024-01-02", "open": 11, "high": 13, "low": 10, "close": 12.5},
    {"date": "2024-01-03", "open": 12.5, "high": 13.5, "low": 11, "close": 11.5}
]"#;

struct EventLog {
    id: String,
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl ChartListener for EventLog {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &ChartEvent, _context: ChartContext) {
        self.events.borrow_mut().push(event.clone());
    }
}

fn engine(auto_render: bool) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::default().with_auto_render(auto_render);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series_json(RECORDS_JSON);
    engine
}

fn attach_log(engine: &mut ChartEngine<NullRenderer>) -> Rc<RefCell<Vec<ChartEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(EventLog {
            id: "log".to_owned(),
            events: Rc::clone(&events),
        }))
        .expect("register listener");
    events
}

#[test]
fn initial_view_state_is_line_without_grid() {
    assert_eq!(
        ViewState::default(),
        ViewState {
            chart_kind: ChartKind::Line,
            grid_visible: false,
            hover_label: String::new(),
        }
    );
}

#[test]
fn chart_kind_change_rebuilds_the_scene() {
    let mut engine = engine(true);
    let renders_before = engine.renderer().render_count;

    engine.set_chart_kind(ChartKind::Candlestick);

    assert_eq!(engine.view_state().chart_kind, ChartKind::Candlestick);
    assert_eq!(engine.renderer().render_count, renders_before + 1);
    assert_eq!(engine.scene().layer(CanvasLayerKind::Series).rects.len(), 3);
}

#[test]
fn reselecting_the_active_kind_is_a_noop() {
    let mut engine = engine(true);
    let events = attach_log(&mut engine);
    let renders_before = engine.renderer().render_count;

    engine.set_chart_kind(ChartKind::Line);

    assert_eq!(engine.renderer().render_count, renders_before);
    assert!(events.borrow().is_empty());
}

#[test]
fn switching_kind_keeps_scale_domains() {
    let mut engine = engine(true);
    let line_scales = *engine.scales().expect("scales");
    for kind in [ChartKind::Bar, ChartKind::Candlestick, ChartKind::Line] {
        engine.set_chart_kind(kind);
        let scales = engine.scales().expect("scales");
        assert_eq!(scales.time.domain(), line_scales.time.domain());
        assert_eq!(scales.price.domain(), line_scales.price.domain());
    }
}

#[test]
fn toggling_grid_twice_restores_the_original_scene() {
    let mut engine = engine(true);
    let original = engine.scene().clone();

    engine.toggle_grid();
    assert!(engine.view_state().grid_visible);
    assert!(!engine.scene().layer(CanvasLayerKind::Grid).is_empty());

    engine.toggle_grid();
    assert_eq!(engine.scene(), &original);
}

#[test]
fn hover_label_is_published_without_rebuilding() {
    let mut engine = engine(true);
    let events = attach_log(&mut engine);
    let renders_before = engine.renderer().render_count;

    engine.control_pointer_enter(SidebarControl::CandlestickChart);
    assert_eq!(engine.view_state().hover_label, "Candlestick Chart");
    engine.control_pointer_enter(SidebarControl::CandlestickChart);
    engine.control_pointer_leave();
    assert_eq!(engine.view_state().hover_label, "");

    assert_eq!(engine.renderer().render_count, renders_before);
    assert_eq!(
        *events.borrow(),
        vec![
            ChartEvent::ViewStateChanged(ViewStateChange::HoverLabel(
                "Candlestick Chart".to_owned()
            )),
            ChartEvent::ViewStateChanged(ViewStateChange::HoverLabel(String::new())),
        ]
    );
}

#[test]
fn sidebar_clicks_drive_view_state() {
    let mut engine = engine(true);

    engine.click_control(SidebarControl::BarChart);
    assert!(engine.is_control_active(SidebarControl::BarChart));
    assert!(!engine.is_control_active(SidebarControl::LineChart));
    assert!(!engine.is_control_active(SidebarControl::ToggleGrid));

    engine.click_control(SidebarControl::ToggleGrid);
    assert!(engine.is_control_active(SidebarControl::ToggleGrid));
    engine.click_control(SidebarControl::ToggleGrid);
    assert!(!engine.view_state().grid_visible);
}

#[test]
fn sidebar_labels_match_buttons() {
    let labels: Vec<_> = SidebarControl::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec!["Line Chart", "Bar Chart", "Candlestick Chart", "Toggle grid"]
    );
}

#[test]
fn manual_mode_coalesces_mutations_into_one_render() {
    let mut engine = engine(false);
    assert_eq!(engine.renderer().render_count, 0);
    assert!(engine.is_invalidated());

    engine.set_chart_kind(ChartKind::Bar);
    engine.toggle_grid();
    engine.set_chart_kind(ChartKind::Candlestick);

    assert!(engine.render_if_invalidated().expect("render"));
    assert!(!engine.render_if_invalidated().expect("render"));
    assert_eq!(engine.renderer().render_count, 1);
    assert_eq!(engine.renderer().clear_count, 1);
    assert!(!engine.scene().layer(CanvasLayerKind::Grid).is_empty());
    assert_eq!(engine.scene().layer(CanvasLayerKind::Series).lines.len(), 3);
}

#[test]
fn enabling_auto_render_flushes_pending_changes() {
    let mut engine = engine(false);
    engine.set_auto_render(true);
    assert!(!engine.is_invalidated());
    assert_eq!(engine.renderer().render_count, 1);
}

#[test]
fn every_rebuild_clears_the_surface_first() {
    let mut engine = engine(true);
    engine.toggle_grid();
    engine.set_chart_kind(ChartKind::Bar);
    let renderer = engine.into_renderer();
    assert_eq!(renderer.clear_count, renderer.render_count);
}

#[test]
fn malformed_json_empties_the_chart() {
    let mut engine = engine(true);
    let events = attach_log(&mut engine);

    engine.set_series_json(r#"[{"date": "2024-01-02", "open": 1, "high": 2, "low": 0.5, "close": 1.5},
                               {"date": "2024-01-01", "open": 1, "high": 2, "low": 0.5, "close": 1.5}]"#);

    assert!(engine.series().is_empty());
    assert!(engine.scene().is_empty());
    assert!(engine.scales().is_none());
    let recorded = events.borrow();
    assert!(matches!(recorded[0], ChartEvent::SeriesRejected { .. }));
    assert!(matches!(recorded.last(), Some(ChartEvent::Cleared)));
}

#[test]
fn listener_ids_are_unique() {
    let mut engine = engine(true);
    let _ = attach_log(&mut engine);
    let duplicate = EventLog {
        id: "log".to_owned(),
        events: Rc::new(RefCell::new(Vec::new())),
    };
    assert!(engine.register_listener(Box::new(duplicate)).is_err());
    assert!(engine.unregister_listener("log"));
    assert_eq!(engine.listener_count(), 0);
}
