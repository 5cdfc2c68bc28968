//! Logged tasks.

use std::sync::LazyLock;

use chrono::TimeDelta;
use regex::Regex;
use serde::Serialize;

use crate::date::CalendarDate;
use crate::duration::{self, Rounding};
use crate::line::{Line, TaskFields, classify};

/// Leading `$` (whitespace around it allowed) marking personally authored work.
static AUTHORS_RIGHTS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\$\s*").unwrap());

/// One logged unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub project: String,
    /// Description with the authors-rights marker removed.
    pub description: String,
    pub authors_rights: bool,
    #[serde(skip)]
    raw_description: String,
    date: Option<CalendarDate>,
}

impl Task {
    /// Builds an undated task from the fields of a classified task line.
    pub fn from_fields(fields: &TaskFields<'_>) -> Self {
        let (authors_rights, description) = split_authors_rights(fields.description);
        Self {
            hours: fields.hours,
            minutes: fields.minutes,
            seconds: fields.seconds,
            project: fields.project.to_string(),
            description: description.to_string(),
            authors_rights,
            raw_description: fields.description.to_string(),
            date: None,
        }
    }

    /// Parses a single task line; `None` unless the line classifies as a task.
    pub fn parse(line: &str) -> Option<Self> {
        match classify(line) {
            Line::Task(fields) => Some(Self::from_fields(&fields)),
            _ => None,
        }
    }

    /// The date of the work day this task belongs to.
    pub const fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    /// The description as written, marker and spacing included.
    pub fn raw_description(&self) -> &str {
        &self.raw_description
    }

    /// Dates the task once. A task keeps the date of the first day it joined.
    pub(crate) const fn assign_date(&mut self, date: CalendarDate) {
        if self.date.is_none() {
            self.date = Some(date);
        }
    }

    /// Time spent on the task.
    pub fn duration(&self, rounding: Rounding) -> TimeDelta {
        duration::elapsed(self.hours, self.minutes, self.seconds, rounding)
    }
}

/// Splits the authors-rights marker off a raw description.
fn split_authors_rights(raw: &str) -> (bool, &str) {
    AUTHORS_RIGHTS_RE
        .find(raw)
        .map_or((false, raw), |marker| (true, &raw[marker.end()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_task_line() {
        let task = Task::parse("09:15:05 - [proj2] Did Y").unwrap();
        assert_eq!(task.hours, 9);
        assert_eq!(task.minutes, 15);
        assert_eq!(task.seconds, 5);
        assert_eq!(task.project, "proj2");
        assert_eq!(task.description, "Did Y");
        assert!(!task.authors_rights);
        assert_eq!(task.date(), None);
    }

    #[test]
    fn authors_rights_marker_is_stripped() {
        let task = Task::parse("1:00:00 - [book] $do the thing").unwrap();
        assert!(task.authors_rights);
        assert_eq!(task.description, "do the thing");

        let task = Task::parse("1:00:00 - [book] $   spaced out").unwrap();
        assert!(task.authors_rights);
        assert_eq!(task.description, "spaced out");
        assert_eq!(task.raw_description(), "$   spaced out");
    }

    #[test]
    fn date_is_assigned_once() {
        let mut task = Task::parse("1:00:00 - [p] x").unwrap();
        task.assign_date(CalendarDate::new(2021, 3, 1));
        task.assign_date(CalendarDate::new(2021, 3, 2));
        assert_eq!(task.date(), Some(CalendarDate::new(2021, 3, 1)));
    }

    #[test]
    fn plain_description_is_unchanged() {
        let task = Task::parse("1:00:00 - [book] do the thing").unwrap();
        assert!(!task.authors_rights);
        assert_eq!(task.description, "do the thing");
    }

    #[test]
    fn marker_only_counts_at_the_start() {
        let task = Task::parse("1:00:00 - [shop] paid $5 for coffee").unwrap();
        assert!(!task.authors_rights);
        assert_eq!(task.description, "paid $5 for coffee");
    }

    #[test]
    fn split_authors_rights_allows_leading_whitespace() {
        assert_eq!(split_authors_rights("  $ draft"), (true, "draft"));
        assert_eq!(split_authors_rights("$"), (true, ""));
        assert_eq!(split_authors_rights("draft"), (false, "draft"));
    }

    #[test]
    fn non_task_lines_do_not_parse() {
        assert_eq!(Task::parse("01.03.2021"), None);
        assert_eq!(Task::parse("10:00:00 - [proj] # skip"), None);
        assert_eq!(Task::parse("random text"), None);
    }

    #[test]
    fn duration_follows_rounding_mode() {
        let task = Task::parse("1:02:30 - [p] x").unwrap();
        assert_eq!(task.duration(Rounding::UpToMinute), TimeDelta::minutes(63));
        assert_eq!(
            task.duration(Rounding::Exact),
            TimeDelta::minutes(62) + TimeDelta::seconds(30)
        );
    }
}
