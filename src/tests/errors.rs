use crate::{date, strftime, Error};

#[test]
fn trailing_marker_fails_at_render() {
    // the stray `%` is only rejected once a date is actually formatted
    assert_eq!(
        strftime([date!("2010-06-06")], "%Y-%"),
        Err(Error::MalformedTemplate { template: "%Y-%".to_string() }),
    );
}

#[test]
fn unknown_specifier_fails_at_render() {
    assert_eq!(
        strftime([date!("2010-06-06")], "%Y-%o"),
        Err(Error::MalformedTemplate { template: "%Y-%o".to_string() }),
    );
}

#[test]
fn error_display() {
    let err = Error::MalformedTemplate { template: "%Y-%".to_string() };
    assert_eq!(err.to_string(), "format template `%Y-%` could not be rendered");

    let err = Error::DayOutOfRange { date: date!("2010-06-06") };
    assert_eq!(
        err.to_string(),
        "day of `2010-06-06` is out of range for its month",
    );
}
