use std::collections::BTreeMap;

use chrono::NaiveDate;

use candela_types::Candle;

/// Splice a freshly fetched tail onto an existing prefix.
///
/// Both inputs are most-recent-first. The result is the union of both,
/// keyed by date:
///
/// - On a duplicate date the tail wins; the prefix's newest rows may carry
///   an intraday quote that the fresh fetch supersedes with a final close.
/// - The output is sorted most-recent-first.
/// - Neither input is mutated; a new series is returned.
#[must_use]
pub fn join_series(prefix: &[Candle], tail: &[Candle]) -> Vec<Candle> {
    let mut map: BTreeMap<NaiveDate, Candle> = BTreeMap::new();
    for c in prefix {
        map.insert(c.date, c.clone());
    }
    for c in tail {
        map.insert(c.date, c.clone());
    }
    map.into_values().rev().collect()
}
