//! FILENAME: core/engine/src/filter.rs
//! PURPOSE: Selects the "district total" rows of a loaded table.
//! CONTEXT: The filter normalizes the header names, checks that the two
//! required columns exist, normalizes the values of those two columns, and
//! keeps the rows where both equal their target literal. All other columns
//! pass through untouched.

use serde::Serialize;
use thiserror::Error;

use crate::normalize::normalize_match_value;
use crate::table::Table;

// ============================================================================
// MATCH CRITERIA
// ============================================================================

pub const TYPE_COLUMN: &str = "type";
pub const TOTAL_COLUMN: &str = "total";
pub const DISTRICT_VALUE: &str = "DISTRICT";
pub const TOTAL_VALUE: &str = "TOTAL";

/// One required column and the normalized value a kept row must hold in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub column: &'static str,
    pub expected: &'static str,
}

/// The fixed criteria: type == DISTRICT and total == TOTAL.
pub const DISTRICT_TOTAL_RULES: [MatchRule; 2] = [
    MatchRule {
        column: TYPE_COLUMN,
        expected: DISTRICT_VALUE,
    },
    MatchRule {
        column: TOTAL_COLUMN,
        expected: TOTAL_VALUE,
    },
];

// ============================================================================
// ERRORS
// ============================================================================

/// Required columns were not found after header normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("missing columns {missing:?} (available: {available:?})")]
pub struct MissingColumns {
    /// Required names that are absent, in rule order.
    pub missing: Vec<String>,
    /// All normalized column names of the table, in column order.
    pub available: Vec<String>,
}

// ============================================================================
// FILTER
// ============================================================================

/// Runs the district-total filter over a loaded table.
///
/// The table's own column names are normalized in place before the check,
/// so the returned table (and the `available` list on error) carry the
/// lowercase names. An empty result is not an error.
pub fn filter_district_totals(table: Table) -> Result<Table, MissingColumns> {
    filter_by_rules(table, &DISTRICT_TOTAL_RULES)
}

fn filter_by_rules(mut table: Table, rules: &[MatchRule]) -> Result<Table, MissingColumns> {
    table.normalize_column_names();

    let mut positions = Vec::with_capacity(rules.len());
    let mut missing = Vec::new();
    for rule in rules {
        match table.position(rule.column) {
            Some(idx) => positions.push(idx),
            None => missing.push(rule.column.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(MissingColumns {
            missing,
            available: table.column_names().iter().map(|s| s.to_string()).collect(),
        });
    }

    for &idx in &positions {
        table.map_column_values(idx, normalize_match_value);
    }

    let keep: Vec<usize> = (0..table.row_count())
        .filter(|&row| {
            rules.iter().zip(&positions).all(|(rule, &col)| {
                table
                    .column(col)
                    .map_or(false, |c| c.values[row] == rule.expected)
            })
        })
        .collect();

    Ok(table.select_rows(&keep))
}
