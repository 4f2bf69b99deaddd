use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::MalformedInput(format!("{field_name} cannot be represented as f64"))
    })
}

/// Continuous day axis used by the time scale (days since 0001-01-01, CE).
#[must_use]
pub fn date_to_day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Inverse of [`date_to_day_number`]; the fractional part is truncated.
#[must_use]
pub fn day_number_to_date(day: f64) -> Option<NaiveDate> {
    if !day.is_finite() || day < f64::from(i32::MIN) || day > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(day.floor() as i32)
}
