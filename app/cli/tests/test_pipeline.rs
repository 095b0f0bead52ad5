//! FILENAME: tests/test_pipeline.rs
//! Integration tests for the load -> filter -> write pipeline.

mod common;

use std::path::Path;

use app_lib::{filter_workbook, Outcome, Stage};
use common::{TestHarness, Value};
use engine::MissingColumns;

fn written(rows: usize, output: &Path) -> Outcome {
    Outcome::Written {
        rows,
        output: output.to_path_buf(),
    }
}

// ============================================================================
// SUCCESSFUL RUNS
// ============================================================================

#[test]
fn test_example_scenario() {
    let harness = TestHarness::new();
    let input = harness.write_district_input("districts.xlsx");
    let output = harness.path("filtered.xlsx");

    let outcome = filter_workbook(&input, &output);

    assert_eq!(outcome, written(2, &output));
    let table = harness.read_output(&output);
    assert_eq!(table.column_names(), vec!["type", "total", "region"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.row(0), Some(vec!["DISTRICT", "TOTAL", "North"]));
    assert_eq!(table.row(1), Some(vec!["DISTRICT", "TOTAL", "East"]));
}

#[test]
fn test_zero_matches_writes_header_only() {
    let harness = TestHarness::new();
    let input = harness.write_input(
        "none.xlsx",
        &["TYPE", " total "],
        &[&["state", "total"], &["district", "partial"]],
    );
    let output = harness.path("out.xlsx");

    let outcome = filter_workbook(&input, &output);

    assert_eq!(outcome, written(0, &output));
    assert!(output.exists());
    let table = harness.read_output(&output);
    assert_eq!(table.column_names(), vec!["type", "total"]);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_other_columns_keep_text_and_order() {
    let harness = TestHarness::new();
    let input = harness.write_typed_input(
        "typed.xlsx",
        &["Population", "Type", "Name", "Total"],
        &[
            vec![
                Value::Number(1200.0),
                Value::Text("district"),
                Value::Text("Old Town"),
                Value::Text("total"),
            ],
            vec![
                Value::Number(3.5),
                Value::Text("District"),
                Value::Blank,
                Value::Text("Total "),
            ],
            vec![
                Value::Number(7.0),
                Value::Text("city"),
                Value::Text("Harbor"),
                Value::Text("total"),
            ],
        ],
    );
    let output = harness.path("out.xlsx");

    let outcome = filter_workbook(&input, &output);

    assert_eq!(outcome, written(2, &output));
    let table = harness.read_output(&output);
    assert_eq!(table.column_names(), vec!["population", "type", "name", "total"]);
    assert_eq!(table.row(0), Some(vec!["1200", "DISTRICT", "Old Town", "TOTAL"]));
    assert_eq!(table.row(1), Some(vec!["3.5", "DISTRICT", "", "TOTAL"]));
}

#[test]
fn test_overwrites_existing_output() {
    let harness = TestHarness::new();
    let input = harness.write_district_input("districts.xlsx");
    let output = harness.write_input("out.xlsx", &["stale"], &[&["row"]]);

    let outcome = filter_workbook(&input, &output);

    assert!(matches!(outcome, Outcome::Written { rows: 2, .. }));
    assert_eq!(harness.read_output(&output).column_names(), vec!["type", "total", "region"]);
}

// ============================================================================
// MISSING COLUMNS
// ============================================================================

#[test]
fn test_missing_column_writes_nothing() {
    let harness = TestHarness::new();
    let input = harness.write_input(
        "no_total.xlsx",
        &["Type", "Region"],
        &[&["District", "North"]],
    );
    let output = harness.path("out.xlsx");

    let outcome = filter_workbook(&input, &output);

    assert_eq!(
        outcome,
        Outcome::MissingColumns(MissingColumns {
            missing: vec!["total".to_string()],
            available: vec!["type".to_string(), "region".to_string()],
        })
    );
    assert!(!output.exists());
}

#[test]
fn test_empty_sheet_reports_both_columns_missing() {
    let harness = TestHarness::new();
    let input = harness.write_input("empty.xlsx", &[], &[]);
    let output = harness.path("out.xlsx");

    let outcome = filter_workbook(&input, &output);

    assert_eq!(
        outcome,
        Outcome::MissingColumns(MissingColumns {
            missing: vec!["type".to_string(), "total".to_string()],
            available: Vec::new(),
        })
    );
    assert!(!output.exists());
}

// ============================================================================
// FILE ERRORS
// ============================================================================

#[test]
fn test_missing_input_fails_at_load() {
    let harness = TestHarness::new();
    let output = harness.path("out.xlsx");

    let outcome = filter_workbook(&harness.path("absent.xlsx"), &output);

    assert!(matches!(outcome, Outcome::Failed { stage: Stage::Load, .. }));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_fails_at_write() {
    let harness = TestHarness::new();
    let input = harness.write_district_input("districts.xlsx");
    let output = harness.path("missing_dir").join("out.xlsx");

    let outcome = filter_workbook(&input, &output);

    match outcome {
        Outcome::Failed { stage, message } => {
            assert_eq!(stage, Stage::Write);
            assert!(!message.is_empty());
        }
        other => panic!("expected write failure, got {:?}", other),
    }
}
