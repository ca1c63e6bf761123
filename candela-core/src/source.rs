use async_trait::async_trait;
use chrono::NaiveDate;

use candela_types::{Candle, CandelaError};

/// Remote daily-history source.
///
/// Implementations own their transport, parsing, and rate limiting; the
/// orchestrator only sees a series or an error. Returned series follow the
/// workspace convention of most-recent-first ordering.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// A stable identifier used in logs and error tagging (e.g. "candela-yahoo").
    fn name(&self) -> &'static str;

    /// Fetch daily candles for `symbol`.
    ///
    /// `start` asks the source for candles from that date onward; `None`
    /// requests the full available history. `adjust` selects
    /// split/dividend-adjusted prices.
    ///
    /// # Errors
    /// Returns `Err(CandelaError::Source)` (or `NotFound`) on any
    /// provider-side failure.
    async fn fetch(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        adjust: bool,
    ) -> Result<Vec<Candle>, CandelaError>;
}

/// Persistent symbol-to-series store.
///
/// Plain key-value semantics: last write wins, no transactions. Durability
/// and on-disk format belong to the implementation.
#[async_trait]
pub trait CandleStore: Send + Sync {
    /// Read the cached series for `symbol`, `None` when absent.
    ///
    /// # Errors
    /// Returns `Err(CandelaError)` when the store itself fails; the
    /// orchestrator treats a failed read the same as an absent entry.
    async fn read(&self, symbol: &str) -> Result<Option<Vec<Candle>>, CandelaError>;

    /// Write the series for `symbol`, replacing any previous entry.
    ///
    /// # Errors
    /// Returns `Err(CandelaError)` when the write fails; orchestrator
    /// write-backs are fire-and-forget and ignore this.
    async fn write(&self, symbol: &str, candles: &[Candle]) -> Result<(), CandelaError>;
}
