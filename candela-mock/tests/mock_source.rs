use candela_core::{CandelaError, CandleStore, HistorySource};
use candela_mock::{MemoryStore, MockSource};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn fixtures_are_most_recent_first() {
    let rows = MockSource::new().fetch("AAPL", None, false).await.unwrap();
    assert!(!rows.is_empty());
    for pair in rows.windows(2) {
        assert!(pair[0].date > pair[1].date);
    }
}

#[tokio::test]
async fn start_floor_keeps_rows_at_or_after_it() {
    let rows = MockSource::new()
        .fetch("AAPL", Some(ymd(2023, 1, 4)), false)
        .await
        .unwrap();
    assert!(rows.iter().all(|c| c.date >= ymd(2023, 1, 4)));
    assert_eq!(rows.last().unwrap().date, ymd(2023, 1, 4));
}

#[tokio::test]
async fn adjusted_fetch_scales_adj_close_only() {
    let plain = MockSource::new().fetch("MSFT", None, false).await.unwrap();
    let adjusted = MockSource::new().fetch("MSFT", None, true).await.unwrap();
    assert_eq!(plain[0].close, adjusted[0].close);
    assert!(adjusted[0].adj_close < plain[0].adj_close);
}

#[tokio::test]
async fn fail_symbol_forces_a_source_error() {
    let err = MockSource::new().fetch("FAIL", None, false).await.unwrap_err();
    assert!(matches!(err, CandelaError::Source { .. }));
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let err = MockSource::new().fetch("NOSUCH", None, false).await.unwrap_err();
    assert!(matches!(err, CandelaError::NotFound { .. }));
}

#[tokio::test]
async fn memory_store_round_trips_and_replaces() {
    let store = MemoryStore::new();
    assert!(store.read("AAPL").await.unwrap().is_none());

    let rows = MockSource::new().fetch("AAPL", None, false).await.unwrap();
    store.write("AAPL", &rows).await.unwrap();
    assert_eq!(store.read("AAPL").await.unwrap().unwrap().len(), rows.len());

    store.write("AAPL", &rows[..2]).await.unwrap();
    assert_eq!(store.read("AAPL").await.unwrap().unwrap().len(), 2);
}

#[tokio::test]
async fn failing_store_rejects_writes_but_serves_reads() {
    let store = MemoryStore::failing_writes();
    let rows = MockSource::new().fetch("AAPL", None, false).await.unwrap();
    assert!(store.write("AAPL", &rows).await.is_err());
    assert!(store.read("AAPL").await.unwrap().is_none());
}
