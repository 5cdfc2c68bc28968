//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{check::CheckArgs, report::ReportArgs, sheet::SheetArgs};

/// Work log reporter.
///
/// Reads a plain-text work log (day headers followed by task lines) and
/// summarizes it by project and by day.
#[derive(Debug, Parser)]
#[command(name = "wl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print tasks by project and totals by day.
    Report(ReportArgs),

    /// Print the parsed time sheet day by day.
    Sheet(SheetArgs),

    /// Validate a log and print line statistics.
    Check(CheckArgs),
}

/// Where the log comes from and how strictly to read it.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Work log file. Reads stdin when omitted or `-`.
    pub path: Option<PathBuf>,

    /// Reject impossible dates and times (e.g. 31.04, 25:00:00).
    #[arg(long)]
    pub strict: bool,
}
