use price_chart::api::{ChartEngine, ChartEngineConfig};
use price_chart::core::Viewport;
use price_chart::interaction::ChartKind;
use price_chart::render::{Renderer, Scene, SvgRenderer};

const RECORDS_JSON: &str = r#"[
    {"date": "2024-01-01", "open": 10, "high": 12, "low": 9, "close": 11},
    {"date": "2024-01-02", "open": 11, "high": 13, "low": 10, "close": 12.5}
]"#;

fn rendered(kind: ChartKind, grid: bool) -> String {
    let config = ChartEngineConfig::default().with_auto_render(false);
    let mut engine =
        ChartEngine::new(SvgRenderer::new(config.viewport), config).expect("engine init");
    engine.set_series_json(RECORDS_JSON);
    engine.set_chart_kind(kind);
    engine.set_grid_visible(grid);
    engine.render().expect("render");
    engine.into_renderer().into_document()
}

#[test]
fn line_document_has_one_group_per_non_empty_layer() {
    let svg = rendered(ChartKind::Line, false);

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="600""#));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"<g class="background">"#));
    assert!(!svg.contains(r#"<g class="grid">"#));
    assert!(svg.contains(r#"<g class="series">"#));
    assert!(svg.contains(r#"<g class="axis">"#));
    assert_eq!(svg.matches("<path").count(), 1);
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains(r#"<circle cx="60" cy="300" r="5" fill="rgba(255, 117, 140, 1)""#));
}

#[test]
fn background_keeps_rounded_translucent_panel() {
    let svg = rendered(ChartKind::Bar, false);
    assert!(svg.contains(
        r#"<rect x="0" y="0" width="1000" height="600" fill="rgba(0, 0, 0, 0.5)" rx="10"/>"#
    ));
}

#[test]
fn grid_group_appears_only_when_enabled() {
    let svg = rendered(ChartKind::Candlestick, true);
    assert!(svg.contains(r#"<g class="grid">"#));
    assert!(svg.contains(">2024</text>"));
    assert!(svg.contains(">Tue 02</text>"));
}

#[test]
fn clear_resets_to_blank_document() {
    let mut renderer = SvgRenderer::new(Viewport::new(320, 200));
    renderer
        .render(&Scene::empty(Viewport::new(320, 200)))
        .expect("render");
    renderer.clear().expect("clear");
    assert_eq!(
        renderer.document(),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="200" viewBox="0 0 320 200"></svg>"#
    );
}
