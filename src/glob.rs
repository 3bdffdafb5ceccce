//! The compaction pass itself: full years first, then full months, then
//! full ten-day spans, then whatever is left day by day.

use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::format::StrftimeItems;
use chrono::{NaiveDate, NaiveTime};

use crate::error::{Error, Result};
use crate::extract::{extract_full_months, extract_full_tens, extract_full_years};
use crate::fields::{self, FieldClass};

/// Format a collection of dates, using `*` wherever possible.
///
/// If `dates` contains all days of June 2011 and `template` is `"%Y/%m/%d"`,
/// the result is `["2011/06/*"]`. Sub-day and timezone directives (`%H`,
/// `%Z`, ...) are always replaced by `*`. Full years, full months and full
/// ten-day spans of a month are compacted; weeks are not.
///
/// The returned strings are distinct and in alphabetical order. Duplicate
/// input dates are tolerated and collapse.
///
/// ```
/// use date_glob::strftime;
/// use chrono::NaiveDate;
///
/// let june: Vec<_> = NaiveDate::from_ymd_opt(2011, 6, 1)
///     .unwrap()
///     .iter_days()
///     .take(30)
///     .collect();
///
/// assert_eq!(strftime(june, "%Y/%m/%d").unwrap(), ["2011/06/*"]);
///
/// let empty = std::iter::empty::<NaiveDate>();
/// assert_eq!(strftime(empty, "%Y/%m/%d").unwrap(), Vec::<String>::new());
/// ```
pub fn strftime<I>(dates: I, template: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut remaining: BTreeSet<NaiveDate> = dates.into_iter().collect();

    if remaining.is_empty() {
        return Ok(Vec::new());
    }

    // A plain `contains` instead of a directive scan, so that malformed
    // templates still reach the formatter and get rejected there.
    if !template.contains('%') {
        return Ok(vec![template.to_string()]);
    }

    #[cfg(feature = "log")]
    fields::warn_unknown_specifiers(template);

    let mut results = BTreeSet::new();

    // year globbing
    if !fields::has_any_field(template, fields::YEAR_BLOCKING) {
        let (full_years, rest) = extract_full_years(&remaining)?;
        remaining = rest;

        if !full_years.is_empty() {
            let year_glob = fields::wildcard_fields(template, fields::YEAR_GLOB);

            for year in full_years {
                results.insert(render(first_of_month(year, 1), &year_glob)?);
            }
        }
    }

    if !fields::has_any_field(template, fields::MONTH_BLOCKING) {
        // month globbing
        let (full_months, rest) = extract_full_months(&remaining)?;
        remaining = rest;

        if !full_months.is_empty() {
            let month_glob = fields::wildcard_fields(template, fields::MONTH_GLOB);

            for (year, month) in full_months {
                results.insert(render(first_of_month(year, month), &month_glob)?);
            }
        }

        // ten-day globbing; only the day-of-month field takes the tens-digit
        // prefix, time fields get a bare wildcard
        let (full_tens, rest) = extract_full_tens(&remaining)?;
        remaining = rest;

        if !full_tens.is_empty() {
            let time_glob = fields::wildcard_fields(template, &[FieldClass::Time]);

            for (year, month, ten) in full_tens {
                // the span index doubles as the shared tens digit
                let first_day = match ten {
                    0 => 1,
                    _ => u32::from(ten) * 10,
                };

                let tens_glob = fields::wildcard_fields_with(
                    &time_glob,
                    &[FieldClass::DayOfMonth],
                    &format!("{ten}*"),
                );

                let first = NaiveDate::from_ymd_opt(year, month, first_day)
                    .expect("ten-day span starts on a valid day");

                results.insert(render(first, &tens_glob)?);
            }
        }
    }

    // everything else, one string per day
    let day_glob = fields::wildcard_fields(template, &[FieldClass::Time]);

    for date in remaining {
        results.insert(render(date, &day_glob)?);
    }

    Ok(results.into_iter().collect())
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of the month should always exist")
}

/// Render a single date against a rewritten template. Formatting happens at
/// midnight so that whole-date directives embedding a clock time (`%c`)
/// still render, the way Python's `date.strftime` does.
fn render(date: NaiveDate, glob: &str) -> Result<String> {
    let midnight = date.and_time(NaiveTime::MIN);
    let mut out = String::with_capacity(glob.len());

    write!(out, "{}", midnight.format_with_items(StrftimeItems::new(glob)))
        .map_err(|_| Error::MalformedTemplate { template: glob.to_string() })?;

    Ok(out)
}
