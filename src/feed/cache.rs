use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::Series;
use crate::error::ChartResult;

/// Default freshness window of a cached series.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    series: Series,
    stored_at: Instant,
}

/// In-memory series cache keyed by symbol.
///
/// Callers pass `now` explicitly, so expiry is deterministic under test.
#[derive(Debug, Clone)]
pub struct SeriesCache {
    ttl: Duration,
    entries: IndexMap<String, CacheEntry>,
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl SeriesCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh entry for `symbol`; a stale one is evicted.
    pub fn get(&mut self, symbol: &str, now: Instant) -> Option<&Series> {
        let fresh = self
            .entries
            .get(symbol)
            .map(|entry| is_fresh(entry, self.ttl, now))?;
        if !fresh {
            debug!(symbol, "evicting stale series");
            self.entries.shift_remove(symbol);
            return None;
        }
        self.entries.get(symbol).map(|entry| &entry.series)
    }

    pub fn insert(&mut self, symbol: &str, series: Series, now: Instant) {
        self.entries.insert(
            symbol.to_owned(),
            CacheEntry {
                series,
                stored_at: now,
            },
        );
    }

    /// Drops every stale entry, returning how many were removed.
    pub fn evict_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| is_fresh(entry, ttl, now));
        before - self.entries.len()
    }

    /// Cached series for `symbol`, or the result of `fetch`.
    ///
    /// A successful fetch is cached. A failed fetch is logged, not cached,
    /// and yields the empty series.
    pub fn get_or_fetch<F>(&mut self, symbol: &str, now: Instant, fetch: F) -> Series
    where
        F: FnOnce(&str) -> ChartResult<Series>,
    {
        if let Some(series) = self.get(symbol, now) {
            debug!(symbol, "using cached series");
            return series.clone();
        }

        match fetch(symbol) {
            Ok(series) => {
                debug!(symbol, record_count = series.len(), "caching fetched series");
                self.insert(symbol, series.clone(), now);
                series
            }
            Err(err) => {
                warn!(symbol, error = %err, "series fetch failed; using empty series");
                Series::empty()
            }
        }
    }
}

fn is_fresh(entry: &CacheEntry, ttl: Duration, now: Instant) -> bool {
    now.saturating_duration_since(entry.stored_at) < ttl
}
