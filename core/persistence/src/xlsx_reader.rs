// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::{PersistenceError, UNNAMED_COLUMN_PREFIX};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use engine::Table;
use std::collections::HashMap;
use std::path::Path;

/// Loads the first sheet of a workbook as a text table.
///
/// The first row of the used range is the header; every later row that has
/// at least one non-empty cell becomes a data row. All cells are coerced to
/// text with `cell_to_text`. Columns are counted from column A, so blank
/// leading columns are kept as `Unnamed: N` columns.
pub fn load_table(path: &Path) -> Result<Table, PersistenceError> {
    let mut workbook = open_workbook_auto(path)?;

    if workbook.sheet_names().is_empty() {
        return Err(PersistenceError::NoSheets);
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(PersistenceError::NoSheets)??;

    // The range starts at its first used cell, not at A1
    let lead = range.start().map_or(0, |(_, col)| col as usize);

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_names(&row_text(header_row, lead)),
        None => return Ok(Table::default()),
    };

    let data: Vec<Vec<String>> = rows
        .map(|row| row_text(row, lead))
        .filter(|row| row.iter().any(|value| !value.is_empty()))
        .collect();

    Ok(Table::from_rows(headers, data)?)
}

/// Cells of one range row as text, preceded by `lead` empty cells.
fn row_text(row: &[Data], lead: usize) -> Vec<String> {
    std::iter::repeat_with(String::new)
        .take(lead)
        .chain(row.iter().map(cell_to_text))
        .collect()
}

/// Renders one cell as text, the way it reads in the sheet.
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => format_datetime(dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Dates as `YYYY-MM-DD HH:MM:SS`; serials outside the calendar fall back
/// to the raw number.
fn format_datetime(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_float(dt.as_f64()),
    }
}

fn format_float(n: f64) -> String {
    // Whole numbers without the trailing ".0"
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Turns the header row into unique column names.
/// Empty headers become `Unnamed: <col>`; repeats get `.1`, `.2`, ... appended.
fn header_names(row: &[String]) -> Vec<String> {
    let raw = row.iter().enumerate().map(|(col_idx, text)| {
        if text.is_empty() {
            format!("{}{}", UNNAMED_COLUMN_PREFIX, col_idx)
        } else {
            text.clone()
        }
    });

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(row.len());

    for name in raw {
        let mut candidate = name;
        let mut seen = counts.get(&candidate).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(candidate.clone(), seen + 1);
            candidate = format!("{}.{}", candidate, seen);
            seen = counts.get(&candidate).copied().unwrap_or(0);
        }
        counts.insert(candidate.clone(), seen + 1);
        names.push(candidate);
    }

    names
}
