//! Report data and its text/JSON renderings.
//!
//! [`Report`] is computed once from a [`TimeSheet`]; [`format_text`] and
//! [`format_json`] are interchangeable serializers over it.

use std::fmt;

use serde::Serialize;

use crate::date::CalendarDate;
use crate::duration::{self, DEFAULT_TARGET_MINUTES, Rounding};
use crate::error::MalformedInputError;
use crate::project::ProjectSheet;
use crate::sheet::{TimeSheet, parse_time_sheet};
use crate::task::Task;

/// Marker appended to days below the target in the text report.
pub const DEFAULT_UNDER_TARGET_MARKER: &str = "!";

/// Knobs for computing a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub rounding: Rounding,
    pub target_minutes: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            target_minutes: DEFAULT_TARGET_MINUTES,
        }
    }
}

/// Aggregated, time-summed view of a time sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub projects: Vec<ProjectEntry>,
    pub days: Vec<DaySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub project: String,
    pub tasks: Vec<TaskEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskEntry {
    pub date: CalendarDate,
    /// `HH:MM`.
    pub duration: String,
    pub seconds: i64,
    pub authors_rights: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: CalendarDate,
    /// `HH:MM`, hours unbounded.
    pub total: String,
    pub seconds: i64,
    pub under_target: bool,
}

impl Report {
    pub fn build(sheet: &TimeSheet, options: &ReportOptions) -> Self {
        let projects = ProjectSheet::from_time_sheet(sheet)
            .iter()
            .map(|project| ProjectEntry {
                project: project.name.to_string(),
                tasks: project
                    .tasks
                    .iter()
                    .map(|task| TaskEntry::new(task, options.rounding))
                    .collect(),
            })
            .collect();

        let target = duration::target(options.target_minutes);
        let days = sheet
            .work_days()
            .iter()
            .map(|day| {
                let total = day.total(options.rounding);
                DaySummary {
                    date: day.date(),
                    total: duration::format_hhmm(total),
                    seconds: total.num_seconds(),
                    under_target: total < target,
                }
            })
            .collect();

        Self { projects, days }
    }

    pub fn task_count(&self) -> usize {
        self.projects
            .iter()
            .map(|project| project.tasks.len())
            .sum()
    }
}

impl TaskEntry {
    fn new(task: &Task, rounding: Rounding) -> Self {
        let elapsed = task.duration(rounding);
        Self {
            // Every task reached through a TimeSheet was dated by its WorkDay.
            date: task.date().unwrap_or_default(),
            duration: duration::format_hhmm(elapsed),
            seconds: elapsed.num_seconds(),
            authors_rights: task.authors_rights,
            description: task.description.clone(),
        }
    }
}

/// Text rendering of a [`Report`].
struct TextReport<'a> {
    report: &'a Report,
    under_target_marker: &'a str,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        if report.days.is_empty() {
            return writeln!(f, "No work days recorded.");
        }

        writeln!(f, "BY PROJECT")?;
        writeln!(f, "──────────")?;
        if report.projects.is_empty() {
            writeln!(f, "(no tasks)")?;
        }
        for (idx, project) in report.projects.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", project.project)?;
            for task in &project.tasks {
                writeln!(
                    f,
                    "{} | {} | {} | {}",
                    task.date,
                    task.duration,
                    u8::from(task.authors_rights),
                    task.description
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "BY DAY")?;
        writeln!(f, "──────")?;
        for day in &report.days {
            write!(f, "{} -> {}", day.date, day.total)?;
            if day.under_target && !self.under_target_marker.is_empty() {
                write!(f, " {}", self.under_target_marker)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders the by-project listing followed by the per-day summary.
pub fn format_text(report: &Report, under_target_marker: &str) -> String {
    TextReport {
        report,
        under_target_marker,
    }
    .to_string()
}

/// Renders the report as pretty-printed JSON.
pub fn format_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Plain dump of the sheet: a `D-M-YYYY` line per day, a tab-indented
/// `[project] description` line per task, and a blank line after each day.
struct SheetDump<'a>(&'a TimeSheet);

impl fmt::Display for SheetDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.0.work_days() {
            writeln!(f, "{:02}-{:02}-{:04}", day.day, day.month, day.year)?;
            for task in day.tasks() {
                writeln!(f, "\t[{}] {}", task.project, task.raw_description())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn format_time_sheet(sheet: &TimeSheet) -> String {
    SheetDump(sheet).to_string()
}

/// Text report with default options.
pub fn format_report(sheet: &TimeSheet) -> String {
    let report = Report::build(sheet, &ReportOptions::default());
    format_text(&report, DEFAULT_UNDER_TARGET_MARKER)
}

/// Parses `input` and renders the default text report.
pub fn process(input: &str) -> Result<String, MalformedInputError> {
    let sheet = parse_time_sheet(input)?;
    Ok(format_report(&sheet))
}
