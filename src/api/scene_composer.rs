use crate::core::{ChartScales, Series};
use crate::error::ChartResult;
use crate::interaction::ChartKind;
use crate::render::{CanvasLayerKind, RectPrimitive, Scene};

use super::axis_scene_builder::{push_axes, push_grid};
use super::{BarRenderer, CandlestickRenderer, ChartEngineConfig, LineRenderer};

/// Per-kind series geometry strategy.
///
/// Implementations append their shapes to the series layer and register one
/// hover target per record.
pub trait ChartRenderer {
    fn kind(&self) -> ChartKind;

    fn compose_series(
        &self,
        series: &Series,
        scales: &ChartScales,
        config: &ChartEngineConfig,
        scene: &mut Scene,
    ) -> ChartResult<()>;
}

/// Strategy drawing `kind`.
#[must_use]
pub fn renderer_for(kind: ChartKind) -> &'static dyn ChartRenderer {
    match kind {
        ChartKind::Line => &LineRenderer,
        ChartKind::Bar => &BarRenderer,
        ChartKind::Candlestick => &CandlestickRenderer,
    }
}

/// Builds the full scene for one frame.
///
/// `scales` is `None` exactly when `series` is empty; the result is then an
/// empty scene. Identical inputs always produce equal scenes.
pub fn compose_scene(
    series: &Series,
    scales: Option<&ChartScales>,
    chart_kind: ChartKind,
    grid_visible: bool,
    config: &ChartEngineConfig,
) -> ChartResult<Scene> {
    let mut scene = Scene::empty(config.viewport);
    let Some(scales) = scales else {
        return Ok(scene);
    };
    if series.is_empty() {
        return Ok(scene);
    }

    let style = &config.style;
    scene.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(config.viewport.width),
            f64::from(config.viewport.height),
            style.background_color,
        )
        .with_corner_radius(style.background_corner_radius_px),
    );

    if grid_visible {
        push_grid(&mut scene, scales, config);
    }

    renderer_for(chart_kind).compose_series(series, scales, config, &mut scene)?;
    push_axes(&mut scene, scales, config);
    Ok(scene)
}
