//! Sheet command: the parsed time sheet, day by day.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use wl_core::format_time_sheet;

use super::util;
use crate::{Config, InputArgs};

#[derive(Debug, Args)]
pub struct SheetArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run<W: Write>(writer: &mut W, args: &SheetArgs, config: &Config) -> Result<()> {
    let (sheet, _stats) = util::load_sheet(&args.input, config)?;
    write!(writer, "{}", format_time_sheet(&sheet))?;
    Ok(())
}
