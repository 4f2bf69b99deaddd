use serde::{Deserialize, Serialize};

use crate::core::{Margin, PlotArea, PriceScale, Series, TimeScale, Viewport};
use crate::error::ChartResult;

/// Time and price scales fitted to one series snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub time: TimeScale,
    pub price: PriceScale,
    pub plot: PlotArea,
}

/// Fits scales to `series` inside the viewport minus `margin`.
///
/// - time domain: `[first date, last date]` onto `[plot.left, plot.right]`
/// - price domain: `[min(low), max(high)]` onto `[plot.bottom, plot.top]`
///
/// Returns `Ok(None)` for an empty series; nothing should be drawn then.
/// Depends only on its inputs, never on view state, so every chart kind sees
/// the same domains.
pub fn build_scales(
    series: &Series,
    viewport: Viewport,
    margin: Margin,
) -> ChartResult<Option<ChartScales>> {
    let plot = PlotArea::resolve(viewport, margin)?;
    let (Some((first_date, last_date)), Some((min_low, max_high))) =
        (series.date_extent(), series.price_extent())
    else {
        return Ok(None);
    };

    let time = TimeScale::new(first_date, last_date, (plot.left, plot.right))?;
    let price = PriceScale::new(min_low, max_high, (plot.bottom, plot.top))?;
    Ok(Some(ChartScales { time, price, plot }))
}
