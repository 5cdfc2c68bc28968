//! Line classification for work log input.
//!
//! Each pattern is compiled once and is the single source of truth for its
//! line kind: [`classify`] hands back the fields it matched, so nothing
//! downstream re-runs a pattern and can disagree with the classification.

use std::sync::LazyLock;

use regex::Regex;

/// `DD.MM.YYYY` at the start of the line.
static DAY_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})").unwrap());

/// A bracketed tag followed by `#` anywhere in the line.
static IGNORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]\s*#").unwrap());

/// `H:MM:SS - [project] description`, project ending at the nearest `]`.
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}):([0-9]{2}):([0-9]{2})\s+-\s+\[([^\]]+)\]\s+(.*)$").unwrap()
});

/// The kind of a raw line, without its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    DayHeader,
    Ignorable,
    Task,
    Unrecognized,
}

/// Fields of a day header line, one-based as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFields {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

/// Fields of a task line. `description` is raw, authors-rights marker included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFields<'a> {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub project: &'a str,
    pub description: &'a str,
}

/// A classified line together with the fields its pattern extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    DayHeader(DayFields),
    Ignorable,
    Task(TaskFields<'a>),
    Unrecognized,
}

impl Line<'_> {
    pub const fn kind(&self) -> LineKind {
        match self {
            Self::DayHeader(_) => LineKind::DayHeader,
            Self::Ignorable => LineKind::Ignorable,
            Self::Task(_) => LineKind::Task,
            Self::Unrecognized => LineKind::Unrecognized,
        }
    }
}

/// Classifies a raw line.
///
/// Patterns are tried in priority order: day header, ignore marker, task.
/// A task-shaped line carrying the ignore marker is therefore `Ignorable`.
pub fn classify(line: &str) -> Line<'_> {
    if let Some(fields) = day_header(line) {
        return Line::DayHeader(fields);
    }
    if IGNORE_RE.is_match(line) {
        return Line::Ignorable;
    }
    task(line).map_or(Line::Unrecognized, Line::Task)
}

fn day_header(line: &str) -> Option<DayFields> {
    let caps = DAY_HEADER_RE.captures(line)?;
    Some(DayFields {
        day: caps[1].parse().ok()?,
        month: caps[2].parse().ok()?,
        year: caps[3].parse().ok()?,
    })
}

fn task(line: &str) -> Option<TaskFields<'_>> {
    let caps = TASK_RE.captures(line)?;
    Some(TaskFields {
        hours: caps[1].parse().ok()?,
        minutes: caps[2].parse().ok()?,
        seconds: caps[3].parse().ok()?,
        project: caps.get(4)?.as_str(),
        description: caps.get(5)?.as_str(),
    })
}
