use candela_types::Candle;

use super::align::align_series;

/// Combine N series into one by unweighted per-field averaging.
///
/// Series are first trimmed to a common window (see [`align_series`]); the
/// output record at index `d` carries the arithmetic mean of every OHLCV
/// field across the inputs at `d`, with `date` taken from the first series
/// and volume rounded to the nearest integer. An empty input list yields an
/// empty series.
#[must_use]
pub fn mix_average(series: &[Vec<Candle>]) -> Vec<Candle> {
    let aligned = align_series(series);
    let Some(first) = aligned.first() else {
        return Vec::new();
    };

    let n = aligned.len() as f64;
    let mut out = Vec::with_capacity(first.len());
    for d in 0..first.len() {
        let mut open = 0.0;
        let mut high = 0.0;
        let mut low = 0.0;
        let mut close = 0.0;
        let mut adj_close = 0.0;
        let mut volume = 0.0;
        for s in &aligned {
            let c = &s[d];
            open += c.open;
            high += c.high;
            low += c.low;
            close += c.close;
            adj_close += c.adj_close;
            volume += c.volume as f64;
        }
        out.push(Candle {
            date: first[d].date,
            open: open / n,
            high: high / n,
            low: low / n,
            close: close / n,
            adj_close: adj_close / n,
            volume: (volume / n).round() as u64,
        });
    }
    out
}
