//! Elapsed-time arithmetic for tasks and days.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Minutes a day must reach before it stops being flagged (7.5 hours).
pub const DEFAULT_TARGET_MINUTES: u32 = 450;

/// How leftover seconds of a task are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Any non-zero seconds round up to the next whole minute.
    #[default]
    UpToMinute,
    /// Seconds are kept as written.
    Exact,
}

/// Elapsed time of an `H:MM:SS` triple under the given rounding mode.
pub fn elapsed(hours: u32, minutes: u32, seconds: u32, rounding: Rounding) -> TimeDelta {
    let whole_minutes = TimeDelta::hours(i64::from(hours)) + TimeDelta::minutes(i64::from(minutes));
    match rounding {
        Rounding::UpToMinute if seconds != 0 => whole_minutes + TimeDelta::minutes(1),
        Rounding::UpToMinute => whole_minutes,
        Rounding::Exact => whole_minutes + TimeDelta::seconds(i64::from(seconds)),
    }
}

/// Sums durations. The result may exceed 24 hours.
pub fn total<I>(durations: I) -> TimeDelta
where
    I: IntoIterator<Item = TimeDelta>,
{
    durations
        .into_iter()
        .fold(TimeDelta::zero(), |acc, d| acc + d)
}

/// The target as a duration.
pub fn target(minutes: u32) -> TimeDelta {
    TimeDelta::minutes(i64::from(minutes))
}

/// Formats a duration as zero-padded `HH:MM`.
///
/// Hours are not wrapped at 24; leftover seconds are truncated and negative
/// durations render as `00:00`.
pub fn format_hhmm(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
