use chrono::{Months, NaiveDate};

pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first_this_month = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of the month should always exist");

    let Some(first_next_month) = first_this_month.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return 31;
    };

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}
