use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{ChartScales, PriceRecord, Series};
use crate::error::{ChartError, ChartResult};

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_right: f64,
    /// `y(max(open, close))`.
    pub body_top: f64,
    /// `y(min(open, close))`.
    pub body_bottom: f64,
    /// `y(high)`.
    pub wick_top: f64,
    /// `y(low)`.
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

impl CandleGeometry {
    #[must_use]
    pub fn body_width(self) -> f64 {
        self.body_right - self.body_left
    }

    #[must_use]
    pub fn body_height(self) -> f64 {
        self.body_bottom - self.body_top
    }
}

/// Projects records into deterministic candle geometry.
///
/// Pure and side-effect free so rendering and regression tests consume the
/// exact same output.
pub fn project_candles(
    series: &Series,
    scales: &ChartScales,
    body_width_px: f64,
) -> ChartResult<Vec<CandleGeometry>> {
    if !body_width_px.is_finite() || body_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "body width must be finite and > 0".to_owned(),
        ));
    }

    // Same output either way; large series just finish sooner in parallel.
    #[cfg(feature = "parallel-projection")]
    {
        Ok(series
            .records()
            .par_iter()
            .map(|record| project_single_candle(record, scales, body_width_px))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(series
            .iter()
            .map(|record| project_single_candle(record, scales, body_width_px))
            .collect())
    }
}

fn project_single_candle(
    record: &PriceRecord,
    scales: &ChartScales,
    body_width_px: f64,
) -> CandleGeometry {
    let half = body_width_px / 2.0;
    let center_x = scales.time.date_to_pixel(record.date);
    let upper_y = scales.price.price_to_pixel(record.open.max(record.close));
    let lower_y = scales.price.price_to_pixel(record.open.min(record.close));

    CandleGeometry {
        center_x,
        body_left: center_x - half,
        body_right: center_x + half,
        body_top: upper_y.min(lower_y),
        body_bottom: upper_y.max(lower_y),
        wick_top: scales.price.price_to_pixel(record.high),
        wick_bottom: scales.price.price_to_pixel(record.low),
        is_bullish: record.is_bullish(),
    }
}
