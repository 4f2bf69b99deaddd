use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::{PriceRecord, Series};
use crate::error::{ChartError, ChartResult};

/// Daily records kept from one provider payload.
pub const DEFAULT_RECORD_LIMIT: usize = 30;

#[derive(Debug, Deserialize)]
struct TimeSeriesPayload {
    #[serde(default)]
    values: Option<Vec<TimeSeriesValue>>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesValue {
    datetime: String,
    open: String,
    high: String,
    low: String,
    close: String,
}

/// Decodes a `time_series` provider payload into a chronological series.
///
/// Provider order is newest first: the first `limit` entries are kept, then
/// reversed. Prices arrive as decimal strings. A payload without `values`
/// (the provider's error shape) or with any unparsable entry is malformed.
pub fn parse_time_series(input: &str, limit: usize) -> ChartResult<Series> {
    let payload: TimeSeriesPayload = serde_json::from_str(input)
        .map_err(|e| ChartError::MalformedInput(format!("failed to parse payload: {e}")))?;

    let Some(values) = payload.values else {
        let status = payload.status.as_deref().unwrap_or("unknown");
        let message = payload.message.as_deref().unwrap_or("no values in payload");
        return Err(ChartError::MalformedInput(format!(
            "provider returned status `{status}`: {message}"
        )));
    };

    let mut records = values
        .iter()
        .take(limit)
        .map(parse_value)
        .collect::<ChartResult<Vec<_>>>()?;
    records.reverse();
    Series::new(records)
}

fn parse_value(value: &TimeSeriesValue) -> ChartResult<PriceRecord> {
    // Intraday entries carry a time after the date.
    let date_part = value.datetime.split_whitespace().next().unwrap_or_default();
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
        ChartError::MalformedInput(format!("invalid datetime `{}`: {e}", value.datetime))
    })?;

    PriceRecord::from_decimal(
        date,
        parse_price(&value.open, "open")?,
        parse_price(&value.high, "high")?,
        parse_price(&value.low, "low")?,
        parse_price(&value.close, "close")?,
    )
}

fn parse_price(raw: &str, field_name: &str) -> ChartResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|e| {
        ChartError::MalformedInput(format!("invalid {field_name} price `{raw}`: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::parse_price;

    #[test]
    fn prices_accept_surrounding_whitespace_only() {
        assert!(parse_price(" 182.5100 ", "open").is_ok());
        assert!(parse_price("182,51", "open").is_err());
        assert!(parse_price("", "close").is_err());
    }
}
