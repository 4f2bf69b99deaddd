use serde::{Deserialize, Serialize};

use crate::core::curve::{PathCommand, monotone_x_path};
use crate::core::{ChartScales, Series};

/// Close price of one record projected to pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Projects `(date, close)` of every record.
#[must_use]
pub fn project_close_points(series: &Series, scales: &ChartScales) -> Vec<LinePoint> {
    series
        .iter()
        .map(|record| LinePoint {
            x: scales.time.date_to_pixel(record.date),
            y: scales.price.price_to_pixel(record.close),
        })
        .collect()
}

/// Smoothed close-price path through the projected points.
#[must_use]
pub fn project_close_path(points: &[LinePoint]) -> Vec<PathCommand> {
    let xy: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    monotone_x_path(&xy)
}
