//! FILENAME: app/cli/src/pipeline.rs
// PURPOSE: The Loaded -> Filtered -> Written pipeline behind one CLI run.
// CONTEXT: Every failure is turned into an `Outcome`; nothing escapes as a
// panic or an error value. A missing-column result stops before writing.

use std::path::Path;

use crate::logging::{log_debug, log_enter_info, log_exit_info, log_info, log_warn};
use crate::outcome::{Outcome, Stage};

/// Reads `input`, keeps the district-total rows, writes them to `output`.
pub fn filter_workbook(input: &Path, output: &Path) -> Outcome {
    log_enter_info!(
        "PIPELINE",
        "filter_workbook",
        "input={} output={}",
        input.display(),
        output.display()
    );

    let outcome = run_stages(input, output);

    log_exit_info!("PIPELINE", "filter_workbook", "{:?}", outcome);
    outcome
}

fn run_stages(input: &Path, output: &Path) -> Outcome {
    let table = match persistence::load_table(input) {
        Ok(table) => table,
        Err(e) => return Outcome::failed(Stage::Load, e),
    };
    log_info!(
        "PIPELINE",
        "Loaded {} rows x {} columns from {}",
        table.row_count(),
        table.column_count(),
        input.display()
    );
    log_debug!("PIPELINE", "Raw columns: {:?}", table.column_names());

    let filtered = match engine::filter_district_totals(table) {
        Ok(filtered) => filtered,
        Err(missing) => {
            log_warn!("PIPELINE", "Required columns not found: {}", missing);
            return missing.into();
        }
    };
    log_info!("PIPELINE", "Filtered down to {} rows", filtered.row_count());

    if !has_xlsx_extension(output) {
        log_warn!(
            "PIPELINE",
            "Output {} does not end in .xlsx; writing an XLSX workbook anyway",
            output.display()
        );
    }

    if let Err(e) = persistence::save_table(&filtered, output) {
        return Outcome::failed(Stage::Write, e);
    }
    log_info!("PIPELINE", "Wrote {}", output.display());

    Outcome::Written {
        rows: filtered.row_count(),
        output: output.to_path_buf(),
    }
}

fn has_xlsx_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("xlsx"))
}
