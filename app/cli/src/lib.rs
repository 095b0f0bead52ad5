//! FILENAME: app/cli/src/lib.rs
// PURPOSE: Library entry point for the district-filter command.
// CONTEXT: `run` parses arguments, sets up logging, runs the pipeline and
// prints the report. The returned status is 0 unless `--exit-codes` is set.

use std::ffi::OsString;
use std::io::{self, Write};

pub mod cli;
pub mod logging;
pub mod outcome;
pub mod pipeline;
pub mod report;

pub use cli::{parse_args, Cli, Invocation, USAGE};
pub use outcome::{Outcome, Stage, EXIT_FILE_ERROR, EXIT_MISSING_COLUMNS, EXIT_OK, EXIT_USAGE};
pub use pipeline::filter_workbook;
pub use report::{print_outcome, render_text, ReportFormat};

/// Runs the command with the process arguments, printing to stdout.
pub fn run() -> std::process::ExitCode {
    let status = run_with_args(std::env::args_os(), &mut io::stdout());
    std::process::ExitCode::from(status)
}

/// Runs the command with explicit arguments and report sink.
/// Returns the process exit status.
pub fn run_with_args<I, T, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    match parse_args(args) {
        Invocation::Info(err) => {
            let _ = err.print();
            if err.use_stderr() {
                EXIT_USAGE
            } else {
                EXIT_OK
            }
        }
        Invocation::Usage {
            exit_codes,
            json,
            detail,
        } => {
            log_debug!("CLI", "Argument error: {}", detail.trim_end());
            let outcome = Outcome::Usage { message: detail };
            emit(&outcome, json, out);
            outcome.exit_status(exit_codes)
        }
        Invocation::Run(cli) => {
            if let Err(e) = logging::init_logging(cli.verbose, cli.log_file.as_deref()) {
                eprintln!("[LOG_INIT] {}", e);
            }

            let outcome = filter_workbook(&cli.input, &cli.output);
            emit(&outcome, cli.json, out);
            outcome.exit_status(cli.exit_codes)
        }
    }
}

fn emit<W: Write>(outcome: &Outcome, json: bool, out: &mut W) {
    let format = if json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    if let Err(e) = print_outcome(outcome, format, out) {
        log_error!("CLI", "Failed to print report: {}", e);
    }
}
