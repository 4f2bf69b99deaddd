use crate::core::{ChartScales, Series, project_close_path, project_close_points};
use crate::error::ChartResult;
use crate::interaction::ChartKind;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, HitShape, HoverTarget, PathPrimitive, Scene,
};

use super::{ChartEngineConfig, ChartRenderer};

/// Monotone close-price line with one hoverable marker per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRenderer;

impl ChartRenderer for LineRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn compose_series(
        &self,
        series: &Series,
        scales: &ChartScales,
        config: &ChartEngineConfig,
        scene: &mut Scene,
    ) -> ChartResult<()> {
        let style = &config.style;
        let points = project_close_points(series, scales);

        let commands = project_close_path(&points);
        if !commands.is_empty() {
            scene.push_path(
                CanvasLayerKind::Series,
                PathPrimitive::new(commands, style.line_stroke_width, style.series_color),
            );
        }

        let radius = config.marker_radius_px;
        for (index, (record, point)) in series.iter().zip(&points).enumerate() {
            scene.push_circle(
                CanvasLayerKind::Series,
                CirclePrimitive::new(point.x, point.y, radius, style.series_color)
                    .with_stroke(style.marker_stroke_width, style.marker_stroke_color),
            );
            scene.push_hover_target(HoverTarget {
                record_index: index,
                record: *record,
                shape: HitShape::Circle {
                    cx: point.x,
                    cy: point.y,
                    radius,
                },
            });
        }
        Ok(())
    }
}
