mod errors;

use chrono::{Datelike, NaiveDate};

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Every day of the given year.
pub(crate) fn year_days(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .expect("invalid year")
        .iter_days()
        .take_while(move |day| day.year() == year)
}

/// Every day of the given month.
pub(crate) fn month_days(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("invalid month")
        .iter_days()
        .take_while(move |day| day.month() == month)
}

/// `count` consecutive days starting from `start`.
pub(crate) fn day_span(start: NaiveDate, count: usize) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take(count)
}
