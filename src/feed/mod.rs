//! Provider payload decoding and series caching.

mod cache;
mod time_series;

pub use cache::{DEFAULT_CACHE_TTL, SeriesCache};
pub use time_series::{DEFAULT_RECORD_LIMIT, parse_time_series};
