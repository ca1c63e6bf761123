//! Symbol-expression parsing.

use candela_types::{SymbolSyntax, SymbolWeights};

/// Parse a symbol expression into tickers and weights.
///
/// The expression is a `list_separator`-joined list where each piece is
/// either a bare ticker or `ticker<weight_separator>weight`. Pieces whose
/// weight parses as a number contribute `(ticker, weight)`; every other
/// piece (bare, or with a malformed weight) contributes the *entire
/// untouched piece* as the ticker with weight `1 / piece_count`. The
/// fallback share is over the whole expression, not over the unweighted
/// remainder, and no error is raised for malformed weights.
///
/// `explicit` on the result is true iff at least one weight parsed, which
/// is what routes a request to the weighted mixer.
#[must_use]
pub fn parse_symbol_weights(expr: &str, syntax: &SymbolSyntax) -> SymbolWeights {
    let pieces: Vec<&str> = expr.split(syntax.list_separator).collect();
    let default_share = 1.0 / pieces.len() as f64;

    let mut entries = Vec::with_capacity(pieces.len());
    let mut explicit = false;
    for piece in pieces {
        match piece.split_once(syntax.weight_separator) {
            Some((symbol, raw_weight)) => match raw_weight.parse::<f64>() {
                Ok(weight) => {
                    entries.push((symbol.to_string(), weight));
                    explicit = true;
                }
                Err(_) => entries.push((piece.to_string(), default_share)),
            },
            None => entries.push((piece.to_string(), default_share)),
        }
    }

    SymbolWeights { entries, explicit }
}
