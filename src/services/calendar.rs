use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Pushes a weekend date forward to the following Monday.
/// Weekdays are returned unchanged, holidays are not considered.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
