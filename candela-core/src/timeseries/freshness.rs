use chrono::{Datelike, Days, NaiveDate, Weekday};

use candela_types::Candle;

/// Decide whether a cached series is current enough to serve as-is.
///
/// The series is most-recent-first; it is up to date when its newest date is
/// no older than the most recent expected trading session before `today`
/// (stepping back over Saturdays and Sundays). A newest date of `today`
/// itself also passes. Pure function: the orchestrator injects
/// `Utc::now().date_naive()` so tests can pin the clock.
///
/// Callers are expected to bypass this for series with fewer than 2 records
/// and refetch instead.
#[must_use]
pub fn is_up_to_date(series: &[Candle], today: NaiveDate) -> bool {
    let Some(newest) = series.first() else {
        return false;
    };
    newest.date >= last_session(today)
}

/// Most recent weekday strictly before `today`.
fn last_session(today: NaiveDate) -> NaiveDate {
    let mut day = today - Days::new(1);
    while matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        day = day - Days::new(1);
    }
    day
}
