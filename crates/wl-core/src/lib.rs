//! Core logic for the work log reporter.
//!
//! This crate turns a plain-text work log into reports:
//! - Line classification: day headers, ignored entries, and task lines
//! - Time sheet building: tasks attached to the most recent day header
//! - Aggregation: tasks regrouped by project, durations summed per day
//! - Rendering: text and JSON reports over the aggregated data
//!
//! The crate performs no I/O and never logs; callers own both.

pub mod date;
pub mod duration;
mod error;
pub mod line;
pub mod project;
pub mod report;
pub mod sheet;
pub mod task;

pub use date::CalendarDate;
pub use duration::Rounding;
pub use error::MalformedInputError;
pub use line::{Line, LineKind, classify};
pub use project::{ProjectSheet, ProjectTasks};
pub use report::{
    DEFAULT_UNDER_TARGET_MARKER, Report, ReportOptions, format_json, format_report, format_text,
    format_time_sheet, process,
};
pub use sheet::{
    LineStats, ParseOptions, TimeSheet, TimeSheetBuilder, WorkDay, parse_time_sheet,
    parse_time_sheet_with,
};
pub use task::Task;
