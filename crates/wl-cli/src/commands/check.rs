//! Check command: validates a log and reports what was recognized.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use wl_core::ProjectSheet;

use super::util;
use crate::{Config, InputArgs};

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run<W: Write>(writer: &mut W, args: &CheckArgs, config: &Config) -> Result<()> {
    let (sheet, stats) = util::load_sheet(&args.input, config)?;
    let projects = ProjectSheet::from_time_sheet(&sheet);

    writeln!(writer, "Work log OK")?;
    writeln!(writer, "Days:         {}", sheet.work_days().len())?;
    writeln!(writer, "Tasks:        {}", sheet.task_count())?;
    writeln!(writer, "Projects:     {}", projects.len())?;
    writeln!(writer, "Ignored:      {}", stats.ignored)?;
    writeln!(writer, "Unrecognized: {}", stats.unrecognized)?;
    Ok(())
}
