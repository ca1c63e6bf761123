use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the candela workspace.
///
/// Collaborator implementations (remote sources, candle stores) surface
/// failures through this enum; the orchestrator converts source failures into
/// empty series and swallows store write failures, so callers of the
/// high-level API never see these variants for remote trouble.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CandelaError {
    /// A remote source failed (network, parse, rate limit, or provider-side).
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with returned or expected data (missing fields, bad shapes).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CandelaError {
    /// Helper: build a `Source` error with the source name and message.
    pub fn source_failed(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}
