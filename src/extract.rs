//! Extraction of "full" calendar periods out of a set of dates.
//!
//! A period (year, month or ten-day span of a month) is full when every one
//! of its calendar days is present in the input. Extractors return the full
//! period keys in ascending order together with the dates that do not belong
//! to any full period, also in ascending order.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};
use crate::utils::{days_in_month, days_in_year};

/// Group dates by period key and split full periods from the remainder.
///
/// Repeated identical dates count once towards a period's coverage.
fn extract_full_periods<K: Ord>(
    dates: &BTreeSet<NaiveDate>,
    period_key: impl Fn(NaiveDate) -> Result<K>,
    period_len: impl Fn(&K) -> u32,
) -> Result<(Vec<K>, BTreeSet<NaiveDate>)> {
    let mut by_period: BTreeMap<K, BTreeSet<NaiveDate>> = BTreeMap::new();

    for &date in dates {
        by_period.entry(period_key(date)?).or_default().insert(date);
    }

    let mut full = Vec::new();
    let mut remainder = BTreeSet::new();

    for (key, days) in by_period {
        if days.len() as u32 == period_len(&key) {
            full.push(key);
        } else {
            remainder.extend(days);
        }
    }

    Ok((full, remainder))
}

/// Find the years that `dates` contains every day of.
pub(crate) fn extract_full_years(
    dates: &BTreeSet<NaiveDate>,
) -> Result<(Vec<i32>, BTreeSet<NaiveDate>)> {
    extract_full_periods(dates, |date| Ok(date.year()), |&year| days_in_year(year))
}

/// Find the `(year, month)` pairs that `dates` contains every day of.
pub(crate) fn extract_full_months(
    dates: &BTreeSet<NaiveDate>,
) -> Result<(Vec<(i32, u32)>, BTreeSet<NaiveDate>)> {
    extract_full_periods(
        dates,
        |date| Ok((date.year(), date.month())),
        |&(year, month)| days_in_month(year, month),
    )
}

/// Find the `(year, month, ten)` triples that `dates` contains every day of,
/// where `ten` indexes the day spans [1-9], [10-19], [20-29] and [30-end].
pub(crate) fn extract_full_tens(
    dates: &BTreeSet<NaiveDate>,
) -> Result<(Vec<(i32, u32, u8)>, BTreeSet<NaiveDate>)> {
    extract_full_periods(
        dates,
        |date| Ok((date.year(), date.month(), which_ten(date)?)),
        |&(year, month, ten)| ten_span_len(year, month, ten),
    )
}

/// The ten-day span a date falls into, which is also the tens digit shared
/// by every day of the span.
pub(crate) fn which_ten(date: NaiveDate) -> Result<u8> {
    if date.day() > days_in_month(date.year(), date.month()) {
        return Err(Error::DayOutOfRange { date });
    }

    Ok(match date.day() {
        1..=9 => 0,
        10..=19 => 1,
        20..=29 => 2,
        _ => 3,
    })
}

/// Number of days a ten-day span holds. The first span only has 9 days, the
/// last one runs to the end of the month, and February's last populated span
/// stops short of 29.
pub(crate) fn ten_span_len(year: i32, month: u32, ten: u8) -> u32 {
    let month_len = days_in_month(year, month);

    match ten {
        0 => 9,
        1 => 10,
        2 if month == 2 => month_len - 20 + 1,
        2 => 10,
        _ => month_len.saturating_sub(29),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date;

    #[test]
    fn test_which_ten() {
        assert_eq!(which_ten(date!("2016-01-01")), Ok(0));
        assert_eq!(which_ten(date!("2016-01-09")), Ok(0));
        assert_eq!(which_ten(date!("2016-01-10")), Ok(1));
        assert_eq!(which_ten(date!("2016-01-19")), Ok(1));
        assert_eq!(which_ten(date!("2016-01-20")), Ok(2));
        assert_eq!(which_ten(date!("2016-01-29")), Ok(2));
        assert_eq!(which_ten(date!("2016-01-30")), Ok(3));
        assert_eq!(which_ten(date!("2016-01-31")), Ok(3));
    }

    // Spans of one month must partition it: 9 + 10 + 10 + (len - 29) days
    // for regular months, 9 + 10 + (len - 19) for February which has no
    // fourth span.
    #[test]
    fn ten_spans_partition_every_month() {
        for year in [2015, 2016] {
            for month in 1..=12 {
                let month_len = days_in_month(year, month);

                let last_ten = which_ten(
                    NaiveDate::from_ymd_opt(year, month, month_len).unwrap(),
                )
                .unwrap();

                let total: u32 = (0..=last_ten)
                    .map(|ten| ten_span_len(year, month, ten))
                    .sum();

                assert_eq!(total, month_len, "year {year} month {month}");
            }
        }
    }

    #[test]
    fn test_full_years() {
        let mut dates: BTreeSet<_> = crate::tests::year_days(2015).collect();
        dates.insert(date!("2016-03-05"));

        let (full, rest) = extract_full_years(&dates).unwrap();
        assert_eq!(full, [2015]);
        assert_eq!(rest.into_iter().collect::<Vec<_>>(), [date!("2016-03-05")]);

        // one missing day and nothing is extracted
        let mut dates: BTreeSet<_> = crate::tests::year_days(2016).collect();
        dates.remove(&date!("2016-02-29"));

        let (full, rest) = extract_full_years(&dates).unwrap();
        assert!(full.is_empty());
        assert_eq!(rest.len(), 365);
    }

    #[test]
    fn test_full_months() {
        let dates: BTreeSet<_> = crate::tests::month_days(2016, 2)
            .chain([date!("2016-03-01")])
            .collect();

        let (full, rest) = extract_full_months(&dates).unwrap();
        assert_eq!(full, [(2016, 2)]);
        assert_eq!(rest.into_iter().collect::<Vec<_>>(), [date!("2016-03-01")]);
    }

    #[test]
    fn test_full_tens() {
        let dates: BTreeSet<_> = crate::tests::day_span(date!("2016-05-01"), 11).collect();

        let (full, rest) = extract_full_tens(&dates).unwrap();
        assert_eq!(full, [(2016, 5, 0)]);

        assert_eq!(
            rest.into_iter().collect::<Vec<_>>(),
            [date!("2016-05-10"), date!("2016-05-11")],
        );
    }
}
