//! Parsed symbol-expression weights and the weighted-series pair.

use serde::{Deserialize, Serialize};

use crate::Candle;

/// Result of parsing a symbol expression: tickers with their weights, in
/// expression order.
///
/// Order matters downstream: the mixers take output dates from the first
/// series, so an ordered pair list is used rather than a map. `explicit` is
/// true when at least one weight was written out in the expression; it
/// selects the weighted mixer over the plain average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolWeights {
    /// `(ticker, weight)` pairs in the order they appeared.
    pub entries: Vec<(String, f64)>,
    /// Whether any weight was parsed from the expression itself.
    pub explicit: bool,
}

impl SymbolWeights {
    /// Number of parsed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the expression yielded no tickers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

/// A resolved price series paired with its mixing weight.
///
/// Explicit pair structure consumed by the weighted mixer; series are
/// most-recent-first like every `Vec<Candle>` in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSeries {
    /// Candles, most-recent-first.
    pub candles: Vec<Candle>,
    /// Positive mixing weight.
    pub weight: f64,
}
