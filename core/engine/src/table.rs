//! FILENAME: core/engine/src/table.rs
//! PURPOSE: Defines the in-memory table that flows through the pipeline.
//! CONTEXT: A `Table` is an ordered list of named columns, each holding one
//! text value per row. Every cell is a `String`; the loader has already
//! coerced numbers, dates and booleans to text. A row has no identity of its
//! own, it is just an index shared by all columns.

use thiserror::Error;

use crate::normalize::normalize_column_name;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("column '{column}' has {found} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has {found} cells but the header has only {width} columns")]
    RowTooWide {
        row: usize,
        width: usize,
        found: usize,
    },
}

/// A named column of text cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }
}

/// Column-oriented text table.
/// Invariant: all columns have the same number of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table from columns, rejecting columns of unequal length.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        if let Some(first) = columns.first() {
            let expected = first.values.len();
            if let Some(bad) = columns.iter().find(|c| c.values.len() != expected) {
                return Err(TableError::RaggedColumns {
                    column: bad.name.clone(),
                    expected,
                    found: bad.values.len(),
                });
            }
        }
        Ok(Table { columns })
    }

    /// Builds a table from a header row and row-major data.
    /// Short rows are padded with empty strings.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let width = headers.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(TableError::RowTooWide {
                    row: row_idx,
                    width,
                    found: row.len(),
                });
            }
            let found = row.len();
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
            for column in columns.iter_mut().skip(found) {
                column.values.push(String::new());
            }
        }

        Ok(Table { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows. A table without columns has no rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Index of the first column whose name equals `name` exactly.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the cells of one row in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values[index].as_str())
                .collect(),
        )
    }

    /// Iterates rows in order, each as cells in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count()).map(move |i| {
            self.columns
                .iter()
                .map(|c| c.values[i].as_str())
                .collect()
        })
    }

    /// Rewrites every column name with `normalize_column_name`, in place.
    pub fn normalize_column_names(&mut self) {
        for column in &mut self.columns {
            column.name = normalize_column_name(&column.name);
        }
    }

    /// Replaces every value of one column with `f(value)`.
    /// Returns false if the column does not exist.
    pub fn map_column_values<F>(&mut self, index: usize, f: F) -> bool
    where
        F: Fn(&str) -> String,
    {
        match self.columns.get_mut(index) {
            Some(column) => {
                for value in &mut column.values {
                    *value = f(value.as_str());
                }
                true
            }
            None => false,
        }
    }

    /// Builds a new table holding only the given rows, in the given order.
    /// Column names and order are kept. Out-of-range indices are skipped.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let row_count = self.row_count();
        let kept: Vec<usize> = indices.iter().copied().filter(|&i| i < row_count).collect();

        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: kept.iter().map(|&i| c.values[i].clone()).collect(),
            })
            .collect();

        Table { columns }
    }
}
