//! FILENAME: app/cli/src/report.rs
// PURPOSE: Renders an `Outcome` for the console, as text lines or JSON.

use std::io::{self, Write};

use crate::cli::USAGE;
use crate::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Text lines for one outcome, in print order.
pub fn render_text(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Written { rows, output } => {
            let count = if *rows == 0 {
                "No matching rows found.".to_string()
            } else {
                format!("Filtered rows: {}", rows)
            };
            vec![count, format!("Output saved to: {}", output.display())]
        }
        Outcome::MissingColumns(err) => vec![
            format!("Missing columns: {}", format_name_list(&err.missing)),
            format!("Available columns: {}", format_name_list(&err.available)),
        ],
        Outcome::Failed { message, .. } => vec![format!("Error: {}", message)],
        Outcome::Usage { .. } => vec![USAGE.to_string()],
    }
}

/// Renders names as `['a', 'b']`.
pub fn format_name_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Writes the report. The JSON form is rendered in full before anything is
/// written, so a failed render leaves `out` untouched.
pub fn print_outcome<W: Write>(
    outcome: &Outcome,
    format: ReportFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => {
            for line in render_text(outcome) {
                writeln!(out, "{}", line)?;
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string(outcome)?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()
}
