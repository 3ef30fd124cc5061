//! Integration tests for loading VertNet exports.

use std::fs;
use std::path::PathBuf;

use geome_ingest::{
    IngestError, any_to_opt_string, read_occurrence_table, validate_required_columns,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn quoted_cells_and_leading_zeros_survive() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "mammals.csv",
        b"catalognumber,tail_length.value,eventdate\n\
          00123,\"12, 14\",1995-03-04\n\
          00124,,\n",
    );
    let df = read_occurrence_table(&path).unwrap();

    assert_eq!(df.height(), 2);
    let catalog = df.column("catalognumber").unwrap();
    assert_eq!(
        any_to_opt_string(catalog.get(0).unwrap()).as_deref(),
        Some("00123")
    );
    let tail = df.column("tail_length.value").unwrap().str().unwrap();
    assert_eq!(tail.get(0), Some("12, 14"));
    assert_eq!(tail.get(1), None);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = read_occurrence_table(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn blank_header_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "blank.csv", b"catalognumber,,country\n1,2,3\n");
    let result = read_occurrence_table(&path);
    assert!(matches!(result, Err(IngestError::EmptyColumnName { .. })));
}

#[test]
fn contract_lists_every_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "partial.csv", b"catalognumber,country\nA,USA\n");
    let df = read_occurrence_table(&path).unwrap();
    let required: Vec<String> = ["catalognumber", "sex", "country", "body_mass.value"]
        .iter()
        .map(|c| c.to_string())
        .collect();

    match validate_required_columns(&df, &required, &path) {
        Err(IngestError::MissingColumns { missing, .. }) => {
            assert_eq!(missing, vec!["sex", "body_mass.value"]);
        }
        other => panic!("expected missing columns, got {other:?}"),
    }
}
