use candela_core::Candle;

/// Deterministic daily history for the fixture symbols, most-recent-first.
pub fn by_symbol(s: &str) -> Option<Vec<Candle>> {
    match s {
        "AAPL" => Some(build(vec![
            ("2023-01-06", 142.4, 143.9, 141.3, 143.2, 11_500_000),
            ("2023-01-05", 141.8, 142.9, 140.6, 142.1, 10_800_000),
            ("2023-01-04", 141.0, 142.5, 140.2, 141.9, 11_200_000),
            ("2023-01-03", 141.0, 143.0, 140.0, 142.0, 11_000_000),
            ("2023-01-02", 140.0, 142.0, 139.0, 141.0, 10_000_000),
        ])),
        "MSFT" => Some(build(vec![
            ("2023-01-06", 246.0, 248.5, 244.1, 247.3, 9_800_000),
            ("2023-01-05", 245.2, 247.0, 244.0, 246.1, 9_600_000),
            ("2023-01-04", 244.5, 246.8, 243.6, 245.8, 9_400_000),
            ("2023-01-03", 244.0, 246.0, 243.0, 245.0, 9_500_000),
            ("2023-01-02", 240.0, 245.0, 238.0, 244.0, 9_000_000),
        ])),
        "GOOG" => Some(build(vec![
            ("2023-01-06", 108.0, 113.5, 106.2, 112.0, 5_800_000),
            ("2023-01-05", 106.5, 111.0, 104.8, 109.5, 5_600_000),
            ("2023-01-04", 105.5, 112.0, 103.0, 108.0, 5_400_000),
            ("2023-01-03", 105.0, 112.0, 102.0, 110.0, 5_500_000),
            ("2023-01-02", 100.0, 110.0, 95.0, 105.0, 5_000_000),
        ])),
        "TSLA" => Some(build(vec![
            ("2023-01-06", 310.0, 318.0, 306.5, 315.0, 8_800_000),
            ("2023-01-05", 307.0, 314.0, 303.0, 311.0, 8_600_000),
            ("2023-01-04", 306.0, 313.0, 302.0, 309.0, 8_400_000),
            ("2023-01-03", 305.0, 315.0, 300.0, 312.0, 8_500_000),
            ("2023-01-02", 300.0, 310.0, 295.0, 305.0, 8_000_000),
        ])),
        _ => None,
    }
}

fn build(rows: Vec<(&str, f64, f64, f64, f64, u64)>) -> Vec<Candle> {
    rows.into_iter()
        .map(|(date, o, h, l, c, v)| Candle {
            date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: o,
            high: h,
            low: l,
            close: c,
            adj_close: c,
            volume: v,
        })
        .collect()
}
