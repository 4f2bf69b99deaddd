use crate::core::{ChartScales, Series, project_bars};
use crate::error::ChartResult;
use crate::interaction::ChartKind;
use crate::render::{CanvasLayerKind, HitShape, HoverTarget, RectPrimitive, Scene};

use super::{ChartEngineConfig, ChartRenderer};

/// Close-price bars rising from the plot baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarRenderer;

impl ChartRenderer for BarRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn compose_series(
        &self,
        series: &Series,
        scales: &ChartScales,
        config: &ChartEngineConfig,
        scene: &mut Scene,
    ) -> ChartResult<()> {
        let bars = project_bars(series, scales, config.bar_width_mode)?;
        for (index, (record, bar)) in series.iter().zip(&bars).enumerate() {
            scene.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(
                    bar.left,
                    bar.top,
                    bar.width,
                    bar.height(),
                    config.style.series_color,
                ),
            );
            scene.push_hover_target(HoverTarget {
                record_index: index,
                record: *record,
                shape: HitShape::padded_rect(bar.left, bar.top, bar.width, bar.height()),
            });
        }
        Ok(())
    }
}
