use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's OHLCV record for a symbol.
///
/// Prices are plain `f64`; `volume` is a non-negative integer and is rounded
/// whenever it is derived from a floating-point computation. A candle is
/// immutable once constructed; equality and ordering consider only `date`,
/// which is what series joining and de-duplication key on.
///
/// Series convention: a `Vec<Candle>` is ordered most-recent-first, i.e.
/// index 0 holds the latest date. After joining, no two candles in one
/// series share a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    /// Trading date of this candle.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Intraday high.
    pub high: f64,
    /// Intraday low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Close adjusted for splits and dividends.
    pub adj_close: f64,
    /// Traded volume.
    pub volume: u64,
}

impl PartialEq for Candle {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for Candle {}

impl PartialOrd for Candle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candle {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.date.cmp(&other.date)
    }
}
