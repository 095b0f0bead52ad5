//! FILENAME: core/persistence/src/lib.rs
//! Persistence Module
//!
//! Loads the first sheet of a spreadsheet workbook into a text `Table` and
//! saves a `Table` back out as a single-sheet XLSX workbook.

mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use error::PersistenceError;
pub use xlsx_reader::{cell_to_text, load_table};
pub use xlsx_writer::save_table;

// ============================================================================
// WORKSHEET LIMITS
// ============================================================================

/// Name of the single worksheet written on save.
pub const OUTPUT_SHEET_NAME: &str = "Sheet1";

/// Maximum rows in one XLSX worksheet (header included).
pub const MAX_SHEET_ROWS: usize = 1_048_576;

/// Maximum columns in one XLSX worksheet.
pub const MAX_SHEET_COLS: usize = 16_384;

/// Prefix given to headers whose cell is empty, followed by the column index.
pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed: ";
