use candela_types::{Candle, WeightedSeries};

use super::align::align_series;

/// Combine N weighted series into one scale-normalized average.
///
/// After the shared window alignment, each series gets a proportion
/// `series[0].open / max_open` where `max_open` is the largest open across
/// *every* record of *every* series. Dividing a series' fields by its
/// proportion lifts it to the nominal price level of the largest-priced
/// input, so a high-priced asset cannot dominate the mix purely through
/// units. Weights are normalized by their sum; the output record at index
/// `d` accumulates `(field / proportion) * (weight / total_weight)` over
/// all series, takes its `date` from the first series, and rounds volume.
///
/// Known quirk, kept for compatibility: the proportion used at index `d` is
/// picked by a counter that advances once per index and wraps modulo the
/// series count, rather than by the identity of the series being summed.
/// Every series summed at index `d` is divided by `proportions[d % n]`.
///
/// An empty input list yields an empty series.
#[must_use]
pub fn mix_weighted(inputs: &[WeightedSeries]) -> Vec<Candle> {
    if inputs.is_empty() {
        return Vec::new();
    }

    let series: Vec<Vec<Candle>> = inputs.iter().map(|ws| ws.candles.clone()).collect();
    let aligned = align_series(&series);
    let Some(first) = aligned.first() else {
        return Vec::new();
    };
    if first.is_empty() {
        return Vec::new();
    }

    let max_open = aligned
        .iter()
        .flatten()
        .map(|c| c.open)
        .fold(f64::MIN, f64::max);
    let proportions: Vec<f64> = aligned.iter().map(|s| s[0].open / max_open).collect();
    let total_weight: f64 = inputs.iter().map(|ws| ws.weight).sum();

    let mut out = Vec::with_capacity(first.len());
    for d in 0..first.len() {
        let proportion = proportions[d % proportions.len()];
        let mut open = 0.0;
        let mut high = 0.0;
        let mut low = 0.0;
        let mut close = 0.0;
        let mut adj_close = 0.0;
        let mut volume = 0.0;
        for (s, ws) in aligned.iter().zip(inputs) {
            // Clamp to the last available record when a series runs short.
            let c = s.get(d).or_else(|| s.last());
            let Some(c) = c else { continue };
            let adjusted_weight = ws.weight / total_weight;
            open += (c.open / proportion) * adjusted_weight;
            high += (c.high / proportion) * adjusted_weight;
            low += (c.low / proportion) * adjusted_weight;
            close += (c.close / proportion) * adjusted_weight;
            adj_close += (c.adj_close / proportion) * adjusted_weight;
            volume += (c.volume as f64 / proportion) * adjusted_weight;
        }
        out.push(Candle {
            date: first[d].date,
            open,
            high,
            low,
            close,
            adj_close,
            volume: volume.round() as u64,
        });
    }
    out
}
