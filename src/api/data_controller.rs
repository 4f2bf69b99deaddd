use tracing::{debug, warn};

use crate::core::{PriceRecord, Series};
use crate::error::ChartError;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the series snapshot and invalidates the scene.
    pub fn set_series(&mut self, series: Series) {
        debug!(record_count = series.len(), "series updated");
        self.series = series;
        self.emit_event(ChartEvent::SeriesUpdated {
            record_count: self.series.len(),
        });
        self.invalidate();
    }

    /// Validates `records` into a series.
    ///
    /// Malformed input is not an error here: the chart is emptied and a
    /// `SeriesRejected` event is published.
    pub fn set_records(&mut self, records: Vec<PriceRecord>) {
        match Series::new(records) {
            Ok(series) => self.set_series(series),
            Err(err) => self.reject_series(&err),
        }
    }

    /// Same as [`ChartEngine::set_records`] for a JSON records array.
    pub fn set_series_json(&mut self, input: &str) {
        match Series::from_json_str(input) {
            Ok(series) => self.set_series(series),
            Err(err) => self.reject_series(&err),
        }
    }

    pub fn clear_series(&mut self) {
        self.set_series(Series::empty());
    }

    fn reject_series(&mut self, err: &ChartError) {
        warn!(error = %err, "rejecting malformed series; chart left empty");
        self.series = Series::empty();
        self.emit_event(ChartEvent::SeriesRejected {
            reason: err.to_string(),
        });
        self.invalidate();
    }
}
