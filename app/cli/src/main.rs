//! FILENAME: app/cli/src/main.rs
// PURPOSE: Command-line entry point.
// FORMAT: report on stdout, diagnostics as seq|level|category|message on stderr

use std::process::ExitCode;

fn main() -> ExitCode {
    app_lib::run()
}
