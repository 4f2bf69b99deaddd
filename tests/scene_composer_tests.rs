use approx::assert_relative_eq;
use chrono::NaiveDate;
use price_chart::api::{ChartEngineConfig, ChartStyle, compose_scene, renderer_for};
use price_chart::core::{BarWidthMode, PriceRecord, Series, build_scales};
use price_chart::interaction::ChartKind;
use price_chart::render::{CanvasLayerKind, HitShape, Scene};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn record(day: u32, open: f64, high: f64, low: f64, close: f64) -> PriceRecord {
    PriceRecord::new(date(2024, 1, day), open, high, low, close).expect("valid record")
}

fn two_bullish_days() -> Series {
    Series::new(vec![
        record(1, 10.0, 12.0, 9.0, 11.0),
        record(2, 11.0, 13.0, 10.0, 12.5),
    ])
    .expect("valid series")
}

fn compose(series: &Series, kind: ChartKind, grid: bool, config: &ChartEngineConfig) -> Scene {
    let scales = build_scales(series, config.viewport, config.margin).expect("scales");
    compose_scene(series, scales.as_ref(), kind, grid, config).expect("scene")
}

#[test]
fn candlestick_example_draws_two_wicks_and_two_bullish_bodies() {
    let config = ChartEngineConfig::default();
    let series = two_bullish_days();
    let scales = build_scales(&series, config.viewport, config.margin)
        .expect("scales")
        .expect("non-empty");
    let scene = compose(&series, ChartKind::Candlestick, false, &config);

    let layer = scene.layer(CanvasLayerKind::Series);
    assert_eq!(layer.lines.len(), 2);
    assert_eq!(layer.rects.len(), 2);

    let y = |price: f64| scales.price.price_to_pixel(price);
    assert_relative_eq!(layer.lines[0].y1, y(12.0));
    assert_relative_eq!(layer.lines[0].y2, y(9.0));
    assert_relative_eq!(layer.lines[1].y1, y(13.0));
    assert_relative_eq!(layer.lines[1].y2, y(10.0));

    let style = ChartStyle::default();
    for body in &layer.rects {
        assert_eq!(body.fill_color, style.bullish_color);
        assert_relative_eq!(body.width, 10.0);
    }
    assert_relative_eq!(layer.rects[0].y, y(11.0));
    assert_relative_eq!(layer.rects[0].y + layer.rects[0].height, y(10.0), epsilon = 1e-9);
}

#[test]
fn default_layout_maps_example_onto_plot_corners() {
    let config = ChartEngineConfig::default();
    let series = two_bullish_days();
    let scales = build_scales(&series, config.viewport, config.margin)
        .expect("scales")
        .expect("non-empty");

    assert_relative_eq!(scales.time.date_to_pixel(date(2024, 1, 1)), 60.0);
    assert_relative_eq!(scales.time.date_to_pixel(date(2024, 1, 2)), 940.0);
    assert_relative_eq!(scales.price.price_to_pixel(13.0), 60.0);
    assert_relative_eq!(scales.price.price_to_pixel(9.0), 540.0);
    assert_relative_eq!(scales.price.price_to_pixel(12.0), 180.0);
}

#[test]
fn flat_and_falling_candles_use_bearish_color() {
    let config = ChartEngineConfig::default();
    let series = Series::new(vec![
        record(1, 10.0, 12.0, 9.0, 10.0),
        record(2, 11.0, 13.0, 10.0, 10.5),
        record(3, 10.0, 12.0, 9.5, 11.0),
    ])
    .expect("series");
    let scene = compose(&series, ChartKind::Candlestick, false, &config);
    let style = ChartStyle::default();
    let fills: Vec<_> = scene
        .layer(CanvasLayerKind::Series)
        .rects
        .iter()
        .map(|rect| rect.fill_color)
        .collect();

    assert_eq!(
        fills,
        vec![style.bearish_color, style.bearish_color, style.bullish_color]
    );
}

#[test]
fn empty_series_composes_empty_scene() {
    let config = ChartEngineConfig::default();
    let series = Series::empty();
    for kind in ChartKind::ALL {
        for grid in [false, true] {
            let scene = compose(&series, kind, grid, &config);
            assert!(scene.is_empty());
            assert_eq!(scene.shape_count(), 0);
            assert!(scene.layer(CanvasLayerKind::Axis).is_empty());
        }
    }
}

#[test]
fn every_kind_registers_one_hover_target_per_record() {
    let config = ChartEngineConfig::default();
    let series = two_bullish_days();
    for kind in ChartKind::ALL {
        let scene = compose(&series, kind, false, &config);
        assert_eq!(scene.hover_targets.len(), series.len(), "{kind}");
        for (index, target) in scene.hover_targets.iter().enumerate() {
            assert_eq!(target.record_index, index);
            assert_eq!(&target.record, series.get(index).expect("record"));
        }
    }
}

#[test]
fn line_kind_draws_one_path_and_marker_per_record() {
    let config = ChartEngineConfig::default();
    let series = two_bullish_days();
    let scene = compose(&series, ChartKind::Line, false, &config);
    let layer = scene.layer(CanvasLayerKind::Series);

    assert_eq!(layer.paths.len(), 1);
    assert_eq!(layer.circles.len(), 2);
    assert!(layer.rects.is_empty());
    assert_relative_eq!(layer.circles[0].radius, 5.0);
    assert!(matches!(
        scene.hover_targets[1].shape,
        HitShape::Circle { cx, cy, .. } if (cx - 940.0).abs() < 1e-9 && (cy - 120.0).abs() < 1e-9
    ));
}

#[test]
fn bars_rise_from_baseline_and_do_not_overlap() {
    let config = ChartEngineConfig::default();
    let series = Series::new(vec![
        record(1, 10.0, 12.0, 9.0, 11.0),
        record(2, 11.0, 13.0, 10.0, 12.5),
        record(8, 12.0, 14.0, 11.0, 13.0),
    ])
    .expect("series");
    let scene = compose(&series, ChartKind::Bar, false, &config);
    let bars = &scene.layer(CanvasLayerKind::Series).rects;

    assert_eq!(bars.len(), 3);
    for bar in bars {
        assert!(bar.width > 0.0);
        assert_relative_eq!(bar.y + bar.height, 540.0, epsilon = 1e-9);
    }
    for pair in bars.windows(2) {
        assert!(pair[0].x + pair[0].width <= pair[1].x + 1e-9);
    }
}

#[test]
fn fixed_bar_width_mode_is_honored() {
    let config = ChartEngineConfig::default()
        .with_bar_width_mode(BarWidthMode::Fixed { width_px: 12.0 });
    let scene = compose(&two_bullish_days(), ChartKind::Bar, false, &config);
    for bar in &scene.layer(CanvasLayerKind::Series).rects {
        assert_relative_eq!(bar.width, 12.0);
    }
}

#[test]
fn grid_adds_lines_without_touching_series_geometry() {
    let config = ChartEngineConfig::default();
    let series = two_bullish_days();
    for kind in ChartKind::ALL {
        let plain = compose(&series, kind, false, &config);
        let gridded = compose(&series, kind, true, &config);

        assert!(plain.layer(CanvasLayerKind::Grid).is_empty());
        // 2 daily time ticks and 9 price ticks (9.0..=13.0 step 0.5).
        assert_eq!(gridded.layer(CanvasLayerKind::Grid).lines.len(), 11);
        assert!(gridded.layer(CanvasLayerKind::Grid).texts.is_empty());
        assert_eq!(
            plain.layer(CanvasLayerKind::Series),
            gridded.layer(CanvasLayerKind::Series)
        );
        assert_eq!(plain.hover_targets, gridded.hover_targets);
    }
}

#[test]
fn axes_carry_domain_lines_ticks_and_labels() {
    let config = ChartEngineConfig::default();
    let scene = compose(&two_bullish_days(), ChartKind::Line, false, &config);
    let axis = scene.layer(CanvasLayerKind::Axis);

    let labels: Vec<&str> = axis.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(&labels[..2], &["2024", "Tue 02"]);
    assert_eq!(labels[2], "9.0");
    assert_eq!(labels.last().copied(), Some("13.0"));
    assert_eq!(axis.texts.len(), 2 + 9);
    // Domain line plus two outer ticks per axis, one tick mark per label.
    assert_eq!(axis.lines.len(), 3 + 2 + 3 + 9);
}

#[test]
fn composing_twice_yields_equal_scenes() {
    let config = ChartEngineConfig::default();
    let series = two_bullish_days();
    for kind in ChartKind::ALL {
        assert_eq!(
            compose(&series, kind, true, &config),
            compose(&series, kind, true, &config)
        );
    }
}

#[test]
fn background_panel_spans_the_canvas() {
    let config = ChartEngineConfig::default();
    let scene = compose(&two_bullish_days(), ChartKind::Bar, false, &config);
    let background = &scene.layer(CanvasLayerKind::Background).rects;

    assert_eq!(background.len(), 1);
    assert_relative_eq!(background[0].width, 1000.0);
    assert_relative_eq!(background[0].height, 600.0);
    assert_relative_eq!(background[0].corner_radius, 10.0);
}

#[test]
fn strategy_lookup_matches_kind() {
    for kind in ChartKind::ALL {
        assert_eq!(renderer_for(kind).kind(), kind);
    }
}
