//! Candela layers a local candle cache over a remote daily-price source and
//! blends multiple tickers' series into one synthetic series.
//!
//! Overview
//! - Resolves each symbol through a cache/fetch/refresh decision chain: serve
//!   the cached series when it is current, splice a partial refresh onto the
//!   cached prefix when it is stale, or refetch the full history.
//! - Combines resolved series with either a plain per-field average or a
//!   weight- and scale-normalized average, selected by whether the symbol
//!   expression carried explicit weights.
//! - Degrades every remote failure to an empty series; callers never see an
//!   error from the high-level API, only "no data".
//!
//! Key behaviors and trade-offs
//! - Partial refresh anchors at the third-most-recent cached date: the newest
//!   one or two cached rows may hold an intraday quote rather than a final
//!   daily close, so they are refetched and the fresh rows win the splice.
//! - Cache write-backs are fire-and-forget: spawned, never awaited, failures
//!   swallowed. A response can return before the store is durably updated.
//! - Multi-symbol requests resolve sequentially; there is no fan-out and no
//!   ordering race between symbols.
//!
//! Building an orchestrator and blending two tickers:
//! ```rust,ignore
//! use std::sync::Arc;
//! use candela::{Candela, FetchOptions};
//!
//! let candela = Candela::builder()
//!     .with_source(Arc::new(YahooSource::new_default()))
//!     .with_store(Arc::new(SledStore::open("cache.db")?))
//!     .build()?;
//!
//! let blended = candela.download("AAPL:2,MSFT:3", &FetchOptions::default()).await;
//! ```
#![warn(missing_docs)]

mod core;
mod fetch;
mod mix;

pub use crate::core::{Candela, CandelaBuilder};
pub use candela_core::{
    Candle, CandelaConfig, CandelaError, CandleStore, FetchOptions, HistorySource, SymbolSyntax,
    SymbolWeights, WeightedSeries,
};
