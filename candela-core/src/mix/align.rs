use candela_types::Candle;

/// Trim a set of most-recent-first series to a comparable window.
///
/// All series are cut to the length of the shortest one, keeping the newest
/// records, so that index `d` refers to comparable points in time across
/// every series. If any input is empty the common length is zero and every
/// output series is empty.
#[must_use]
pub fn align_series(series: &[Vec<Candle>]) -> Vec<Vec<Candle>> {
    let Some(min_len) = series.iter().map(Vec::len).min() else {
        return Vec::new();
    };
    series
        .iter()
        .map(|s| s[..min_len].to_vec())
        .collect()
}
