//! Mock history source and in-memory candle store for CI-safe tests.
//!
//! `MockSource` serves deterministic fixture data; `MemoryStore` is a plain
//! `HashMap`-backed `CandleStore` with an optional forced-write-failure mode
//! for exercising the orchestrator's fire-and-forget contract.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use candela_core::{Candle, CandelaError, CandleStore, HistorySource};

mod fixtures;

/// Factor applied to `adj_close` when an adjusted fetch is requested, so
/// tests can tell adjusted and unadjusted responses apart.
const ADJUST_FACTOR: f64 = 0.97;

/// Mock history source serving deterministic fixtures.
///
/// The symbol `"FAIL"` forces a source error; unknown symbols return
/// `NotFound`. A `start` floor keeps candles dated at or after it, mirroring
/// a provider-side period query.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create the mock source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HistorySource for MockSource {
    fn name(&self) -> &'static str {
        "candela-mock"
    }

    async fn fetch(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        adjust: bool,
    ) -> Result<Vec<Candle>, CandelaError> {
        if symbol == "FAIL" {
            return Err(CandelaError::source_failed("candela-mock", "forced failure"));
        }
        let mut candles = fixtures::by_symbol(symbol)
            .ok_or_else(|| CandelaError::not_found(format!("history for {symbol}")))?;
        if let Some(start) = start {
            candles.retain(|c| c.date >= start);
        }
        if adjust {
            for c in &mut candles {
                c.adj_close = c.close * ADJUST_FACTOR;
            }
        }
        Ok(candles)
    }
}

/// In-memory `CandleStore` backed by a mutex-guarded map.
pub struct MemoryStore {
    inner: Mutex<HashMap<String, Vec<Candle>>>,
    fail_writes: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            fail_writes: false,
        }
    }

    /// Create a store whose writes always fail, for write-back tests.
    #[must_use]
    pub fn failing_writes() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    /// Pre-populate the entry for `symbol`.
    pub async fn seed(&self, symbol: &str, candles: Vec<Candle>) {
        self.inner.lock().await.insert(symbol.to_string(), candles);
    }

    /// Snapshot the stored entry for `symbol`, if any.
    pub async fn entry(&self, symbol: &str) -> Option<Vec<Candle>> {
        self.inner.lock().await.get(symbol).cloned()
    }
}

#[async_trait]
impl CandleStore for MemoryStore {
    async fn read(&self, symbol: &str) -> Result<Option<Vec<Candle>>, CandelaError> {
        Ok(self.inner.lock().await.get(symbol).cloned())
    }

    async fn write(&self, symbol: &str, candles: &[Candle]) -> Result<(), CandelaError> {
        if self.fail_writes {
            return Err(CandelaError::Other("forced write failure".into()));
        }
        self.inner
            .lock()
            .await
            .insert(symbol.to_string(), candles.to_vec());
        Ok(())
    }
}
