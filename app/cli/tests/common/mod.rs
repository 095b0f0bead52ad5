//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for district-filter integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use engine::Table;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::TempDir;

/// A cell value for fixture workbooks.
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Test harness owning a scratch directory for input and output workbooks.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    /// Create a harness with an empty scratch directory.
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Path of a file inside the scratch directory (not created).
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a single-sheet workbook with a header row and text rows.
    pub fn write_input(&self, name: &str, headers: &[&str], rows: &[&[&str]]) -> PathBuf {
        let typed: Vec<Vec<Value>> = rows
            .iter()
            .map(|row| row.iter().map(|s| Value::Text(*s)).collect())
            .collect();
        self.write_typed_input(name, headers, &typed)
    }

    /// Write a single-sheet workbook whose data cells keep their type.
    pub fn write_typed_input(&self, name: &str, headers: &[&str], rows: &[Vec<Value>]) -> PathBuf {
        let path = self.path(name);
        let mut xlsx = XlsxWorkbook::new();
        let sheet = xlsx.add_worksheet();

        for (col, header) in headers.iter().enumerate() {
            sheet.write_string(0, col as u16, *header).expect("write header");
        }
        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            for (col, value) in row.iter().enumerate() {
                match value {
                    Value::Text(s) => {
                        sheet.write_string(r, col as u16, *s).expect("write text");
                    }
                    Value::Number(n) => {
                        sheet.write_number(r, col as u16, *n).expect("write number");
                    }
                    Value::Blank => {}
                }
            }
        }

        xlsx.save(&path).expect("save fixture");
        path
    }

    /// Write the standard district fixture and return its path.
    pub fn write_district_input(&self, name: &str) -> PathBuf {
        self.write_input(name, &DistrictFixture::headers(), &DistrictFixture::rows())
    }

    /// Load a workbook written by the tool.
    pub fn read_output(&self, path: &std::path::Path) -> Table {
        persistence::load_table(path).expect("read output workbook")
    }
}

/// The example dataset: two district-total rows out of three.
pub struct DistrictFixture;

impl DistrictFixture {
    pub fn headers() -> [&'static str; 3] {
        ["Type", "Total", "Region"]
    }

    pub fn rows() -> [&'static [&'static str]; 3] {
        [
            &["District", "Total", "North"],
            &["state", "partial", "South"],
            &["DISTRICT", "TOTAL", "East"],
        ]
    }
}
