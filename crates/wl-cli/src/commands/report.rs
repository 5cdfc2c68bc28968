//! Report command: tasks by project and totals by day.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use wl_core::{Report, format_json, format_text};

use super::util;
use crate::{Config, InputArgs};

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Keep seconds instead of rounding each task up to the minute.
    #[arg(long)]
    pub exact: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &ReportArgs, config: &Config) -> Result<()> {
    let (sheet, _stats) = util::load_sheet(&args.input, config)?;
    let report = Report::build(&sheet, &config.report_options(args.exact));
    tracing::debug!(
        projects = report.projects.len(),
        days = report.days.len(),
        "built report"
    );

    if args.json {
        writeln!(writer, "{}", format_json(&report)?)?;
    } else {
        let text = format_text(&report, &config.under_target_marker);
        write!(writer, "{text}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use insta::assert_snapshot;

    const LOG: &str = "\
01.03.2021
09:00:00 - [proj1] Did X
09:15:05 - [proj2] $Did Y
notes that are skipped
02.03.2021
0:45:30 - [proj1] Did Z
0:30:00 - [proj1] [x] # private
";

    fn args(path: &Path) -> ReportArgs {
        ReportArgs {
            input: InputArgs {
                path: Some(path.to_path_buf()),
                strict: false,
            },
            json: false,
            exact: false,
        }
    }

    fn run_to_string(args: &ReportArgs, config: &Config) -> String {
        let mut output = Vec::new();
        run(&mut output, args, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn report_text_output() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("work.log");
        std::fs::write(&path, LOG).unwrap();

        let output = run_to_string(&args(&path), &Config::default());
        assert_snapshot!(output, @r"
        BY PROJECT
        ──────────
        [proj1]
        2021-03-01 | 09:00 | 0 | Did X
        2021-03-02 | 00:46 | 0 | Did Z

        [proj2]
        2021-03-01 | 09:16 | 1 | Did Y

        BY DAY
        ──────
        2021-03-01 -> 18:16
        2021-03-02 -> 00:46 !
        ");
    }

    #[test]
    fn report_exact_and_custom_marker() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("work.log");
        std::fs::write(&path, LOG).unwrap();

        let config = Config {
            under_target_marker: "(short)".to_string(),
            ..Config::default()
        };
        let mut args = args(&path);
        args.exact = true;

        let output = run_to_string(&args, &config);
        assert!(output.contains("2021-03-02 | 00:45 | 0 | Did Z"));
        assert!(output.contains("2021-03-01 -> 18:15\n"));
        assert!(output.contains("2021-03-02 -> 00:45 (short)\n"));
    }

    #[test]
    fn report_json_output() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("work.log");
        std::fs::write(&path, LOG).unwrap();

        let mut args = args(&path);
        args.json = true;

        let output = run_to_string(&args, &Config::default());
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["projects"].as_array().unwrap().len(), 2);
        assert_eq!(json["projects"][1]["tasks"][0]["authors_rights"], true);
        assert_eq!(json["days"][1]["total"], "00:46");
        assert_eq!(json["days"][1]["under_target"], true);
    }

    #[test]
    fn report_strict_from_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("work.log");
        std::fs::write(&path, "31.04.2021\n1:00:00 - [p] x\n").unwrap();

        let lax = run_to_string(&args(&path), &Config::default());
        assert!(lax.contains("2021-04-31 -> 01:00 !"));

        let config = Config {
            strict: true,
            ..Config::default()
        };
        let mut output = Vec::new();
        let err = run(&mut output, &args(&path), &config).unwrap_err();
        let cause = err.root_cause().to_string();
        assert!(cause.contains("day 31 is out of range"), "cause: {cause}");
    }
}
