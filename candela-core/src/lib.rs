//! candela-core
//!
//! Collaborator traits, time-series utilities, and series mixers shared
//! across the candela ecosystem.
//!
//! - `source`: the `HistorySource` and `CandleStore` traits the orchestrator
//!   is built against.
//! - `timeseries`: splicing a fresh tail onto a cached prefix, and the cache
//!   freshness policy.
//! - `mix`: alignment of unequal-length series plus the plain-average and
//!   weight-and-scale-normalized mixers.
//! - `symbols`: the symbol-expression parser.
//!
//! Async runtime (Tokio)
//! ---------------------
//! The collaborator traits are `async_trait` and assume the Tokio ecosystem;
//! the orchestrator crate spawns its fire-and-forget store write-backs on a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

/// Series mixers and the shared alignment step.
pub mod mix;
/// Collaborator traits for remote sources and candle stores.
pub mod source;
/// Symbol-expression parsing.
pub mod symbols;
/// Time-series utilities: joining and freshness.
pub mod timeseries;

pub use candela_types::{
    Candle, CandelaConfig, CandelaError, FetchOptions, SymbolSyntax, SymbolWeights, WeightedSeries,
};
pub use mix::{align_series, mix_average, mix_weighted};
pub use source::{CandleStore, HistorySource};
pub use symbols::parse_symbol_weights;
pub use timeseries::freshness::is_up_to_date;
pub use timeseries::join::join_series;
