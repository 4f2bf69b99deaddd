use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::error::ChartResult;

/// Relative span a collapsed price domain is widened to (1% of the price).
pub const PRICE_MIN_SPAN_RATIO: f64 = 0.01;
/// Span used when a collapsed price domain sits at exactly zero.
pub const PRICE_MIN_SPAN_AT_ZERO: f64 = 1.0;

/// Vertical axis mapping prices onto pixels.
///
/// The range is given as `(bottom_px, top_px)`, so higher prices land on
/// smaller y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    scale: LinearScale,
}

impl PriceScale {
    pub fn new(min_price: f64, max_price: f64, range: (f64, f64)) -> ChartResult<Self> {
        let scale =
            LinearScale::with_min_span((min_price, max_price), range, min_span_for(min_price, max_price))?;
        Ok(Self { scale })
    }

    #[must_use]
    pub fn price_to_pixel(self, price: f64) -> f64 {
        self.scale.map(price)
    }

    #[must_use]
    pub fn pixel_to_price(self, pixel: f64) -> f64 {
        self.scale.invert(pixel)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.scale.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.scale.range()
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.scale.ticks(count)
    }

    /// Formatter matching the precision of [`PriceScale::ticks`] for `count`.
    #[must_use]
    pub fn tick_format(self, count: usize) -> PriceTickFormat {
        PriceTickFormat::for_step(self.scale.tick_step(count))
    }
}

fn min_span_for(min_price: f64, max_price: f64) -> f64 {
    let magnitude = min_price.abs().max(max_price.abs());
    if magnitude > 0.0 && magnitude.is_finite() {
        magnitude * PRICE_MIN_SPAN_RATIO
    } else {
        PRICE_MIN_SPAN_AT_ZERO
    }
}

/// Fixed-precision, comma-grouped number format for price ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTickFormat {
    pub precision: usize,
}

impl PriceTickFormat {
    /// Chooses just enough decimals to tell ticks `step` apart.
    #[must_use]
    pub fn for_step(step: f64) -> Self {
        let step = step.abs();
        if !step.is_finite() || step == 0.0 {
            return Self { precision: 0 };
        }
        let exponent = step.log10().floor();
        Self {
            precision: (-exponent).max(0.0) as usize,
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        let fixed = format!("{:.*}", self.precision, value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
        let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        if value.is_sign_negative() && !is_zero {
            grouped.push('-');
        }
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        if let Some(fraction) = fraction {
            grouped.push('.');
            grouped.push_str(fraction);
        }
        grouped
    }
}
