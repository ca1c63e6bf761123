//! Configuration types shared by the orchestrator and the symbol parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Separator characters recognized by the symbol-expression parser.
///
/// An expression is a list of tickers joined by `list_separator`, where each
/// ticker may carry an explicit weight after `weight_separator`, e.g.
/// `"AAPL:2,MSFT:3"` with the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSyntax {
    /// Separator between tickers in a multi-symbol expression.
    pub list_separator: char,
    /// Separator between a ticker and its weight.
    pub weight_separator: char,
}

impl Default for SymbolSyntax {
    fn default() -> Self {
        Self {
            list_separator: ',',
            weight_separator: ':',
        }
    }
}

/// Per-request options for resolving a symbol's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Consult the candle store before going to the remote source.
    pub use_cache: bool,
    /// Request split/dividend-adjusted prices from the source.
    pub adjust: bool,
    /// Lower date bound: cached candles must be strictly after it, freshly
    /// fetched candles at or after it.
    pub start_date: Option<NaiveDate>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            adjust: false,
            start_date: None,
        }
    }
}

impl FetchOptions {
    /// Options with caching disabled, everything else default.
    #[must_use]
    pub const fn no_cache() -> Self {
        Self {
            use_cache: false,
            adjust: false,
            start_date: None,
        }
    }
}

/// Global configuration for the `Candela` orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandelaConfig {
    /// Symbol-expression syntax used by `download`.
    pub syntax: SymbolSyntax,
}
