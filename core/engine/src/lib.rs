//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Library entry point for the table engine.
//! CONTEXT: Holds the in-memory `Table` that the loader fills, the
//! normalization helpers, and the district-total filter. No file I/O
//! happens here; `persistence` reads and writes workbooks around it.
//!
//! PIPELINE: Workbook --> load --> Table --> filter --> Table --> save --> Workbook

pub mod filter;
pub mod normalize;
pub mod table;

// Re-export commonly used types at the crate root
pub use filter::{
    filter_district_totals, MatchRule, MissingColumns, DISTRICT_TOTAL_RULES, DISTRICT_VALUE,
    TOTAL_COLUMN, TOTAL_VALUE, TYPE_COLUMN,
};
pub use normalize::{normalize_column_name, normalize_match_value};
pub use table::{Column, Table, TableError};

