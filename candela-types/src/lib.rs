//! candela-types
//!
//! Shared data model, configuration, and error types for the candela
//! workspace.
//!
//! - `candle`: the daily OHLCV record and series conventions.
//! - `config`: orchestrator options and symbol-expression syntax.
//! - `error`: the unified `CandelaError` enum.
//! - `weights`: parsed symbol/weight expressions.
#![warn(missing_docs)]

/// Daily OHLCV candle record.
pub mod candle;
/// Configuration types for the orchestrator and the symbol parser.
pub mod config;
/// Unified error type for the candela workspace.
pub mod error;
/// Parsed symbol-expression weights.
pub mod weights;

pub use candle::Candle;
pub use config::{CandelaConfig, FetchOptions, SymbolSyntax};
pub use error::CandelaError;
pub use weights::{SymbolWeights, WeightedSeries};
