use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// One trading day summarized as open/high/low/close.
///
/// The usual OHLC ordering (`low <= open/close <= high`) is assumed but not
/// enforced: out-of-order prices are drawn as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceRecord {
    /// Builds a record, rejecting non-finite prices.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        let record = Self {
            date,
            open,
            high,
            low,
            close,
        };
        record.validate()?;
        Ok(record)
    }

    /// Converts exact decimal prices into a record.
    pub fn from_decimal(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            date,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(ChartError::MalformedInput(format!(
                    "record {} has non-finite `{field}`",
                    self.date
                )));
            }
        }
        Ok(())
    }

    /// Strictly rising day. A flat day (`close == open`) counts as bearish.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Chronological, duplicate-free sequence of daily records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PriceRecord>", into = "Vec<PriceRecord>")]
pub struct Series {
    records: Vec<PriceRecord>,
}

impl Series {
    /// Validates and wraps records that must already be strictly ascending by
    /// date.
    pub fn new(records: Vec<PriceRecord>) -> ChartResult<Self> {
        for record in &records {
            record.validate()?;
        }
        if let Some(pair) = records.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(ChartError::MalformedInput(format!(
                "records must be strictly ascending by date: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of `{date, open, high, low, close}` objects.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::MalformedInput(format!("invalid series json: {err}")))
    }

    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PriceRecord> {
        self.records.get(index)
    }

    /// First and last dates; records are sorted so no scan is needed.
    #[must_use]
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }

    /// `(min(low), max(high))` over all records.
    #[must_use]
    pub fn price_extent(&self) -> Option<(f64, f64)> {
        let min_low = self.records.iter().map(|r| OrderedFloat(r.low)).min()?;
        let max_high = self.records.iter().map(|r| OrderedFloat(r.high)).max()?;
        Some((min_low.into_inner(), max_high.into_inner()))
    }
}

impl TryFrom<Vec<PriceRecord>> for Series {
    type Error = ChartError;

    fn try_from(records: Vec<PriceRecord>) -> ChartResult<Self> {
        Self::new(records)
    }
}

impl From<Series> for Vec<PriceRecord> {
    fn from(series: Series) -> Self {
        series.records
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a PriceRecord;
    type IntoIter = std::slice::Iter<'a, PriceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{PriceRecord, Series};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).expect("date")
    }

    #[test]
    fn flat_day_is_bearish() {
        let record = PriceRecord::new(day(1), 10.0, 11.0, 9.0, 10.0).expect("record");
        assert!(!record.is_bullish());
    }

    #[test]
    fn series_rejects_duplicate_and_unsorted_dates() {
        let a = PriceRecord::new(day(2), 1.0, 2.0, 0.5, 1.5).expect("a");
        let b = PriceRecord::new(day(1), 1.0, 2.0, 0.5, 1.5).expect("b");
        assert!(Series::new(vec![a, b]).is_err());
        assert!(Series::new(vec![a, a]).is_err());
        assert!(Series::new(vec![b, a]).is_ok());
    }

    #[test]
    fn price_extent_uses_low_and_high() {
        let series = Series::new(vec![
            PriceRecord::new(day(1), 10.0, 12.0, 9.0, 11.0).expect("1"),
            PriceRecord::new(day(2), 11.0, 13.0, 10.0, 12.5).expect("2"),
        ])
        .expect("series");
        assert_eq!(series.price_extent(), Some((9.0, 13.0)));
        assert_eq!(series.date_extent(), Some((day(1), day(2))));
    }

    #[test]
    fn json_missing_field_is_malformed() {
        let err = Series::from_json_str(r#"[{"date":"2024-01-01","open":1,"high":2,"low":0.5}]"#)
            .expect_err("close is missing");
        assert!(err.to_string().starts_with("malformed input"));
    }
}
