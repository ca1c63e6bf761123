use tracing::debug;

use candela_core::{mix_average, mix_weighted, parse_symbol_weights};
use candela_types::{Candle, FetchOptions, WeightedSeries};

use crate::Candela;

impl Candela {
    /// Resolve a symbol expression and blend the resulting series.
    ///
    /// The expression is parsed with the configured syntax; each ticker is
    /// resolved sequentially through [`history`](Self::history), one symbol's
    /// cache/fetch/refresh cycle completing before the next begins. When the
    /// expression carried explicit weights the weighted mixer is used,
    /// otherwise the plain average.
    ///
    /// A symbol that resolves to no data stays in the mix as an empty series;
    /// the shared alignment then collapses the whole combination to empty,
    /// which is the only failure signal this API emits.
    pub async fn download(&self, expr: &str, opts: &FetchOptions) -> Vec<Candle> {
        let weights = parse_symbol_weights(expr, &self.cfg.syntax);
        if weights.is_empty() {
            return Vec::new();
        }
        debug!(
            expr,
            symbols = weights.len(),
            explicit = weights.explicit,
            "resolving symbol expression"
        );

        if weights.explicit {
            let mut inputs = Vec::with_capacity(weights.len());
            for (symbol, weight) in &weights.entries {
                let candles = self.history(symbol, opts).await;
                inputs.push(WeightedSeries {
                    candles,
                    weight: *weight,
                });
            }
            mix_weighted(&inputs)
        } else {
            let mut series = Vec::with_capacity(weights.len());
            for (symbol, _) in &weights.entries {
                series.push(self.history(symbol, opts).await);
            }
            mix_average(&series)
        }
    }
}
