use candela_core::is_up_to_date;
use candela_types::Candle;
use chrono::NaiveDate;

fn candle(date: NaiveDate) -> Candle {
    Candle {
        date,
        open: 100.0,
        high: 101.0,
        low: 99.0,
        close: 100.5,
        adj_close: 100.5,
        volume: 1_000,
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn series(newest: NaiveDate) -> Vec<Candle> {
    vec![candle(newest), candle(newest - chrono::Days::new(1))]
}

#[test]
fn friday_data_is_fresh_on_monday() {
    // 2024-06-10 is a Monday; Friday the 7th was the last session.
    assert!(is_up_to_date(&series(ymd(2024, 6, 7)), ymd(2024, 6, 10)));
}

#[test]
fn thursday_data_is_stale_on_monday() {
    assert!(!is_up_to_date(&series(ymd(2024, 6, 6)), ymd(2024, 6, 10)));
}

#[test]
fn same_day_data_is_fresh() {
    assert!(is_up_to_date(&series(ymd(2024, 6, 12)), ymd(2024, 6, 12)));
}

#[test]
fn previous_weekday_is_fresh_midweek() {
    // Wednesday the 12th: Tuesday's close is current, Monday's is not.
    assert!(is_up_to_date(&series(ymd(2024, 6, 11)), ymd(2024, 6, 12)));
    assert!(!is_up_to_date(&series(ymd(2024, 6, 10)), ymd(2024, 6, 12)));
}

#[test]
fn saturday_data_is_fresh_on_sunday() {
    // Sunday the 9th looks back to Friday the 7th; weekend rows also pass.
    assert!(is_up_to_date(&series(ymd(2024, 6, 7)), ymd(2024, 6, 9)));
    assert!(is_up_to_date(&series(ymd(2024, 6, 8)), ymd(2024, 6, 9)));
}

#[test]
fn empty_series_is_never_fresh() {
    assert!(!is_up_to_date(&[], ymd(2024, 6, 10)));
}
