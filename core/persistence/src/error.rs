//! FILENAME: core/persistence/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet read error: {0}")]
    Read(#[from] calamine::Error),

    #[error("Workbook contains no sheets")]
    NoSheets,

    #[error("Table too large for one worksheet: {rows} rows x {cols} columns")]
    TooLarge { rows: usize, cols: usize },

    #[error("Malformed table: {0}")]
    Table(#[from] engine::TableError),
}
