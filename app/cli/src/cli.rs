//! FILENAME: app/cli/src/cli.rs
// PURPOSE: Command-line argument parsing.
// CONTEXT: A bad argument list is not a hard failure. The usage line is
// printed like any other report and the run ends normally.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

/// Printed whenever the arguments cannot be parsed.
pub const USAGE: &str = "Usage: district-filter input.xlsx output.xlsx";

/// Extract the "district total" rows of a spreadsheet into a new workbook.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "district-filter", version, about)]
pub struct Cli {
    /// Spreadsheet to read (first sheet only)
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Workbook to write the matching rows to
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Exit with a distinct status per outcome (0 ok, 1 file error, 2 usage, 3 missing columns)
    #[arg(long)]
    pub exit_codes: bool,

    /// Print the outcome as a single JSON object instead of text
    #[arg(long)]
    pub json: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// What the process should do after looking at its arguments.
#[derive(Debug)]
pub enum Invocation {
    /// Arguments are fine, run the filter.
    Run(Cli),
    /// Arguments are wrong; report usage. The output flags are honoured if present.
    Usage {
        exit_codes: bool,
        json: bool,
        detail: String,
    },
    /// `--help` or `--version`; clap renders it.
    Info(clap::Error),
}

pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match Cli::try_parse_from(&args) {
        Ok(cli) => Invocation::Run(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Info(err)
        }
        Err(err) => Invocation::Usage {
            exit_codes: has_flag(&args, "--exit-codes"),
            json: has_flag(&args, "--json"),
            detail: err.to_string(),
        },
    }
}

fn has_flag(args: &[OsString], flag: &str) -> bool {
    args.iter().skip(1).any(|arg| arg.to_str() == Some(flag))
}
