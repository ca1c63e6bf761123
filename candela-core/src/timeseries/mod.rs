//! Time-series utilities shared by the orchestrator and the mixers.
//!
//! Modules include:
//! - `join`: splice a freshly fetched tail onto a cached prefix
//! - `freshness`: decide whether a cached series is current enough to serve
/// Cache freshness policy.
pub mod freshness;
/// Join utilities for splicing cached and fresh series.
pub mod join;
