use std::sync::Arc;

use candela_core::{CandleStore, HistorySource};
use candela_types::{CandelaConfig, CandelaError};

/// Orchestrator that layers a candle store over a remote history source.
///
/// Explicitly constructed and dependency-injected: the source and store are
/// passed in at build time so tests can substitute fakes. No process-wide
/// singleton exists.
pub struct Candela {
    pub(crate) source: Arc<dyn HistorySource>,
    pub(crate) store: Arc<dyn CandleStore>,
    pub(crate) cfg: CandelaConfig,
}

impl std::fmt::Debug for Candela {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candela")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

impl Candela {
    /// Start building an orchestrator.
    #[must_use]
    pub fn builder() -> CandelaBuilder {
        CandelaBuilder::new()
    }
}

/// Builder for constructing a [`Candela`] orchestrator.
pub struct CandelaBuilder {
    source: Option<Arc<dyn HistorySource>>,
    store: Option<Arc<dyn CandleStore>>,
    cfg: CandelaConfig,
}

impl Default for CandelaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CandelaBuilder {
    /// Create a new builder with default configuration.
    ///
    /// A history source and a candle store must both be registered before
    /// [`build`](Self::build) succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            store: None,
            cfg: CandelaConfig::default(),
        }
    }

    /// Register the remote history source.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn HistorySource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Register the candle store used for caching.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn CandleStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the symbol-expression syntax.
    #[must_use]
    pub fn syntax(mut self, syntax: candela_types::SymbolSyntax) -> Self {
        self.cfg.syntax = syntax;
        self
    }

    /// Finish building the orchestrator.
    ///
    /// # Errors
    /// Returns `Err(CandelaError::InvalidArg)` when no source or no store was
    /// registered.
    pub fn build(self) -> Result<Candela, CandelaError> {
        let source = self
            .source
            .ok_or_else(|| CandelaError::InvalidArg("a history source is required".into()))?;
        let store = self
            .store
            .ok_or_else(|| CandelaError::InvalidArg("a candle store is required".into()))?;
        Ok(Candela {
            source,
            store,
            cfg: self.cfg,
        })
    }
}
