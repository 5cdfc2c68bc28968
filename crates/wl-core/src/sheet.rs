//! Work days, the time sheet, and the line-by-line builder that fills them.

use std::ops::RangeInclusive;

use chrono::TimeDelta;
use serde::Serialize;

use crate::date::CalendarDate;
use crate::duration::{self, Rounding};
use crate::error::MalformedInputError;
use crate::line::{DayFields, Line, TaskFields, classify};
use crate::task::Task;

/// One calendar day's worth of logged tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDay {
    pub day: u32,
    pub month: u32,
    pub year: u32,
    tasks: Vec<Task>,
}

impl WorkDay {
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self {
            day,
            month,
            year,
            tasks: Vec::new(),
        }
    }

    pub const fn from_fields(fields: &DayFields) -> Self {
        Self::new(fields.year, fields.month, fields.day)
    }

    pub const fn date(&self) -> CalendarDate {
        CalendarDate::new(self.year, self.month, self.day)
    }

    /// Takes ownership of `task`, dating it with this day unless it already
    /// carries a date.
    pub fn add_task(&mut self, mut task: Task) {
        task.assign_date(self.date());
        self.tasks.push(task);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Sum of the task durations of this day.
    pub fn total(&self, rounding: Rounding) -> TimeDelta {
        duration::total(self.tasks.iter().map(|task| task.duration(rounding)))
    }
}

/// All work days of a log, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeSheet {
    work_days: Vec<WorkDay>,
}

impl TimeSheet {
    pub const fn new() -> Self {
        Self {
            work_days: Vec::new(),
        }
    }

    pub fn add_work_day(&mut self, work_day: WorkDay) {
        self.work_days.push(work_day);
    }

    pub fn work_days(&self) -> &[WorkDay] {
        &self.work_days
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.work_days.iter().flat_map(WorkDay::tasks)
    }

    pub fn task_count(&self) -> usize {
        self.work_days.iter().map(|day| day.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.work_days.is_empty()
    }
}

/// Options controlling how strictly lines are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject impossible dates and times instead of accepting them as written.
    pub strict: bool,
}

/// Counts of lines seen by a [`TimeSheetBuilder`], by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub day_headers: usize,
    pub tasks: usize,
    pub ignored: usize,
    pub unrecognized: usize,
}

/// Builds a [`TimeSheet`] from lines fed in file order.
///
/// `current` is the day that task lines attach to; it is `None` until the
/// first header and is moved into the sheet when the next header arrives or
/// on [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct TimeSheetBuilder {
    options: ParseOptions,
    sheet: TimeSheet,
    current: Option<WorkDay>,
    stats: LineStats,
}

impl TimeSheetBuilder {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Feeds one line. `line_number` is one-based and only used for errors.
    pub fn push_line(&mut self, line_number: usize, line: &str) -> Result<(), MalformedInputError> {
        match classify(line) {
            Line::DayHeader(fields) => {
                if self.options.strict {
                    check_day(&fields, line_number, line)?;
                }
                if let Some(previous) = self.current.replace(WorkDay::from_fields(&fields)) {
                    self.sheet.add_work_day(previous);
                }
                self.stats.day_headers += 1;
            }
            Line::Task(fields) => {
                let Some(day) = self.current.as_mut() else {
                    return Err(MalformedInputError::TaskBeforeDayHeader {
                        line_number,
                        content: line.to_string(),
                    });
                };
                if self.options.strict {
                    check_task(&fields, line_number, line)?;
                }
                day.add_task(Task::from_fields(&fields));
                self.stats.tasks += 1;
            }
            Line::Ignorable => self.stats.ignored += 1,
            Line::Unrecognized => self.stats.unrecognized += 1,
        }
        Ok(())
    }

    pub const fn stats(&self) -> LineStats {
        self.stats
    }

    pub fn finish(mut self) -> TimeSheet {
        if let Some(day) = self.current.take() {
            self.sheet.add_work_day(day);
        }
        self.sheet
    }
}

/// Parses a whole log with default (lax) options.
pub fn parse_time_sheet(input: &str) -> Result<TimeSheet, MalformedInputError> {
    parse_time_sheet_with(input, ParseOptions::default())
}

/// Parses a whole log. Fails on the first malformed line; no partial sheet is returned.
pub fn parse_time_sheet_with(
    input: &str,
    options: ParseOptions,
) -> Result<TimeSheet, MalformedInputError> {
    let mut builder = TimeSheetBuilder::new(options);
    for (idx, line) in input.lines().enumerate() {
        builder.push_line(idx + 1, line)?;
    }
    Ok(builder.finish())
}

fn check_range(
    field: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
    line_number: usize,
    line: &str,
) -> Result<(), MalformedInputError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(MalformedInputError::OutOfRange {
            line_number,
            field,
            value,
            content: line.to_string(),
        })
    }
}

fn check_day(
    fields: &DayFields,
    line_number: usize,
    line: &str,
) -> Result<(), MalformedInputError> {
    check_range("month", fields.month, 1..=12, line_number, line)?;
    check_range("day", fields.day, 1..=31, line_number, line)?;
    let date = CalendarDate::new(fields.year, fields.month, fields.day);
    if date.to_naive().is_none() {
        return Err(MalformedInputError::OutOfRange {
            line_number,
            field: "day",
            value: fields.day,
            content: line.to_string(),
        });
    }
    Ok(())
}

fn check_task(
    fields: &TaskFields<'_>,
    line_number: usize,
    line: &str,
) -> Result<(), MalformedInputError> {
    check_range("hour", fields.hours, 0..=23, line_number, line)?;
    check_range("minute", fields.minutes, 0..=59, line_number, line)?;
    check_range("second", fields.seconds, 0..=59, line_number, line)
}
