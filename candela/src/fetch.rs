use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use candela_core::{is_up_to_date, join_series};
use candela_types::{Candle, FetchOptions};

use crate::Candela;

impl Candela {
    /// Resolve the daily history for one symbol.
    ///
    /// Decision chain per request:
    /// 1. With caching enabled, read the stored series and keep only candles
    ///    strictly after `opts.start_date`. A store read failure counts as a
    ///    miss.
    /// 2. Nothing usable cached, or fewer than 2 rows (too short for the
    ///    freshness check): full fetch.
    /// 3. Cached and up to date: serve the cached series unmodified.
    /// 4. Cached but stale: partial refresh, fetching from the third-most-recent
    ///    cached date and splice the fresh tail onto the cached prefix. An
    ///    empty tail falls back to a full fetch that ignores the cache.
    ///
    /// Never fails: any source error degrades to an empty series, and cache
    /// write-backs are fire-and-forget.
    pub async fn history(&self, symbol: &str, opts: &FetchOptions) -> Vec<Candle> {
        let cached = if opts.use_cache {
            self.cached_series(symbol, opts).await
        } else {
            Vec::new()
        };

        if cached.len() < 2 {
            return self.full_fetch(symbol, opts).await;
        }

        let today = Utc::now().date_naive();
        if is_up_to_date(&cached, today) {
            debug!(symbol, rows = cached.len(), "serving fresh cached series");
            return cached;
        }

        self.partial_refresh(symbol, &cached, opts).await
    }

    /// Cached candles strictly after the requested start date, newest first.
    async fn cached_series(&self, symbol: &str, opts: &FetchOptions) -> Vec<Candle> {
        let stored = match self.store.read(symbol).await {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                debug!(symbol, error = %e, "store read failed; treating as cache miss");
                Vec::new()
            }
        };
        match opts.start_date {
            Some(start) => stored.into_iter().filter(|c| c.date > start).collect(),
            None => stored,
        }
    }

    /// Fetch the full remote history, write it back when caching is on, and
    /// trim to the start date. Source errors degrade to an empty series.
    async fn full_fetch(&self, symbol: &str, opts: &FetchOptions) -> Vec<Candle> {
        let fetched = match self.source.fetch(symbol, None, opts.adjust).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(symbol, source = self.source.name(), error = %e, "full fetch failed");
                return Vec::new();
            }
        };
        if opts.use_cache {
            self.spawn_write_back(symbol, fetched.clone());
        }
        match opts.start_date {
            Some(start) => fetched.into_iter().filter(|c| c.date >= start).collect(),
            None => fetched,
        }
    }

    /// Refetch from a checkpoint inside the cached series and splice.
    ///
    /// The checkpoint is the third-most-recent cached date (index 2): the
    /// newest one or two rows may reflect an intraday quote rather than a
    /// final daily close, so they are re-requested and the fresh rows win
    /// the join. On a short series the checkpoint clamps to the oldest row.
    async fn partial_refresh(
        &self,
        symbol: &str,
        cached: &[Candle],
        opts: &FetchOptions,
    ) -> Vec<Candle> {
        let checkpoint = cached
            .get(2)
            .or_else(|| cached.last())
            .map(|c| c.date);

        let tail = match self.source.fetch(symbol, checkpoint, opts.adjust).await {
            Ok(tail) => tail,
            Err(e) => {
                warn!(symbol, source = self.source.name(), error = %e, "partial refresh failed");
                Vec::new()
            }
        };
        if tail.is_empty() {
            debug!(symbol, "partial refresh returned nothing; refetching full history");
            return self.full_fetch(symbol, opts).await;
        }

        let joined = join_series(cached, &tail);
        // Unconditional write-back: the joined series supersedes the stale
        // cache entry regardless of the caller's caching flag.
        self.spawn_write_back(symbol, joined.clone());
        joined
    }

    /// Fire-and-forget store write-back: spawned, never awaited; a failed
    /// write is logged and dropped.
    fn spawn_write_back(&self, symbol: &str, candles: Vec<Candle>) {
        let store = Arc::clone(&self.store);
        let symbol = symbol.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.write(&symbol, &candles).await {
                debug!(symbol, error = %e, "cache write-back failed; ignoring");
            }
        });
    }
}
