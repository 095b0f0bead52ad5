//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::{PersistenceError, MAX_SHEET_COLS, MAX_SHEET_ROWS, OUTPUT_SHEET_NAME};
use engine::Table;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook};
use std::path::Path;

/// Saves a table as a single-sheet XLSX workbook.
///
/// Row 0 holds the column names, then one row per table row in order.
/// Empty values stay blank cells; everything else is written as a string.
/// A table without rows still produces a valid file with just the header.
pub fn save_table(table: &Table, path: &Path) -> Result<(), PersistenceError> {
    let rows = table.row_count();
    let cols = table.column_count();

    // +1 for the header row
    if rows + 1 > MAX_SHEET_ROWS || cols > MAX_SHEET_COLS {
        return Err(PersistenceError::TooLarge { rows, cols });
    }

    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET_NAME)?;

    let header_format = header_format();
    for (col, name) in table.column_names().into_iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (row_idx, row) in table.rows().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, value) in row.into_iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(row_num, col as u16, value)?;
        }
    }

    xlsx.save(path)?;
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}
