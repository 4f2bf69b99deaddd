use serde::{Deserialize, Serialize};

use crate::core::{ChartScales, Series};
use crate::error::{ChartError, ChartResult};

/// How wide each close-price bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BarWidthMode {
    /// Plot width divided by record count, capped by the tightest pixel gap
    /// between neighbouring records so bars never overlap.
    #[default]
    EvenSpacing,
    /// Constant width regardless of record spacing.
    Fixed { width_px: f64 },
}

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub center_x: f64,
    pub left: f64,
    pub width: f64,
    /// `y(close)`.
    pub top: f64,
    /// Plot baseline (`height - margin.bottom`).
    pub bottom: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Resolves the bar width for `series` under `mode`.
pub fn resolve_bar_width(
    series: &Series,
    scales: &ChartScales,
    mode: BarWidthMode,
) -> ChartResult<f64> {
    match mode {
        BarWidthMode::Fixed { width_px } => {
            if !width_px.is_finite() || width_px <= 0.0 {
                return Err(ChartError::InvalidData(
                    "bar width must be finite and > 0".to_owned(),
                ));
            }
            Ok(width_px)
        }
        BarWidthMode::EvenSpacing => {
            let count = series.len().max(1) as f64;
            let even = scales.plot.width() / count;
            let tightest_gap = series
                .records()
                .windows(2)
                .map(|pair| {
                    scales.time.date_to_pixel(pair[1].date) - scales.time.date_to_pixel(pair[0].date)
                })
                .filter(|gap| gap.is_finite() && *gap > 0.0)
                .fold(f64::INFINITY, f64::min);
            let width = even.min(tightest_gap);
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "resolved bar width must be finite and > 0".to_owned(),
                ));
            }
            Ok(width)
        }
    }
}

/// Projects one bar per record, from `y(close)` down to the plot baseline.
pub fn project_bars(
    series: &Series,
    scales: &ChartScales,
    mode: BarWidthMode,
) -> ChartResult<Vec<BarGeometry>> {
    let width = resolve_bar_width(series, scales, mode)?;
    let half = width / 2.0;
    let baseline = scales.plot.bottom;

    Ok(series
        .iter()
        .map(|record| {
            let center_x = scales.time.date_to_pixel(record.date);
            let close_y = scales.price.price_to_pixel(record.close);
            BarGeometry {
                center_x,
                left: center_x - half,
                width,
                top: close_y.min(baseline),
                bottom: close_y.max(baseline),
            }
        })
        .collect())
}
