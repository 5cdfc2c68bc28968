//! Calendar dates as written in day headers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A one-based calendar date taken verbatim from a `DD.MM.YYYY` header.
///
/// No calendar validation is applied: `31.04.2021` is stored as written.
/// Use [`CalendarDate::to_naive`] when a real calendar date is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the chrono date, or `None` if the date does not exist.
    pub fn to_naive(self) -> Option<NaiveDate> {
        let year = i32::try_from(self.year).ok()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
