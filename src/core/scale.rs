use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

// Step multipliers are chosen by comparing the raw step against the geometric
// means of the 1/2/5/10 ladder.
const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a scale whose domain spans at least `min_span`.
    ///
    /// A narrower domain is widened symmetrically around its midpoint, so a
    /// collapsed domain (`start == end`) maps its single value to the middle of
    /// the range.
    pub fn with_min_span(domain: (f64, f64), range: (f64, f64), min_span: f64) -> ChartResult<Self> {
        if !min_span.is_finite() || min_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale min span must be finite and > 0".to_owned(),
            ));
        }
        let (start, end) = domain;
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }

        let (low, high) = if start <= end { (start, end) } else { (end, start) };
        if high - low >= min_span {
            return Self::new((low, high), range);
        }
        let mid = low + (high - low) / 2.0;
        let half = min_span / 2.0;
        Self::new((mid - half, mid + half), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Round-valued ticks inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Distance between consecutive values of [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        tick_step(self.domain_start, self.domain_end, count)
    }
}

/// Returns `(first_index, last_index, increment)`; a negative increment means
/// tick values are `index / -increment`, which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round();
        last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round();
        last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (first, last, increment)
}

#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let (first, last, increment) = tick_spec(low, high, count as f64);
    if !increment.is_finite() || increment == 0.0 || last < first {
        return Vec::new();
    }

    let n = (last - first + 1.0) as usize;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let index = first + i as f64;
            if increment < 0.0 {
                index / -increment
            } else {
                index * increment
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, increment) = tick_spec(low, high, count as f64);
    let step = if increment < 0.0 {
        1.0 / -increment
    } else {
        increment
    };
    if reverse { -step } else { step }
}
