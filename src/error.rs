use std::fmt;

use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported while compacting dates into globs.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// The formatter rejected the template while rendering a concrete date,
    /// for example because of a stray trailing `%` or an unknown specifier.
    /// Only detected when a render is actually attempted.
    MalformedTemplate { template: String },
    /// A date's day-of-month exceeds the length of its own month. Cannot
    /// happen with dates built through `chrono` and indicates a defect in the
    /// date source.
    DayOutOfRange { date: NaiveDate },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTemplate { template } => {
                write!(f, "format template `{template}` could not be rendered")
            }
            Self::DayOutOfRange { date } => {
                write!(f, "day of `{date}` is out of range for its month")
            }
        }
    }
}

impl std::error::Error for Error {}
