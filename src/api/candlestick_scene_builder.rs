use crate::core::{ChartScales, Series, project_candles};
use crate::error::ChartResult;
use crate::interaction::ChartKind;
use crate::render::{
    CanvasLayerKind, HitShape, HoverTarget, LinePrimitive, RectPrimitive, Scene,
};

use super::{ChartEngineConfig, ChartRenderer};

/// High-low wick plus open-close body per record.
///
/// Only the body is hoverable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandlestickRenderer;

impl ChartRenderer for CandlestickRenderer {
    fn kind(&self) -> ChartKind {
        ChartKind::Candlestick
    }

    fn compose_series(
        &self,
        series: &Series,
        scales: &ChartScales,
        config: &ChartEngineConfig,
        scene: &mut Scene,
    ) -> ChartResult<()> {
        let style = &config.style;
        let candles = project_candles(series, scales, config.candle_body_width_px)?;

        // Wicks first so bodies paint over them.
        for candle in &candles {
            scene.push_line(
                CanvasLayerKind::Series,
                LinePrimitive::new(
                    candle.center_x,
                    candle.wick_top,
                    candle.center_x,
                    candle.wick_bottom,
                    style.wick_stroke_width,
                    style.wick_color,
                ),
            );
        }

        for (index, (record, candle)) in series.iter().zip(&candles).enumerate() {
            scene.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(
                    candle.body_left,
                    candle.body_top,
                    candle.body_width(),
                    candle.body_height(),
                    style.candle_body_color(candle.is_bullish),
                ),
            );
            scene.push_hover_target(HoverTarget {
                record_index: index,
                record: *record,
                shape: HitShape::padded_rect(
                    candle.body_left,
                    candle.body_top,
                    candle.body_width(),
                    candle.body_height(),
                ),
            });
        }
        Ok(())
    }
}
