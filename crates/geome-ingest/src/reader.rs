//! Loading the VertNet export into an all-string Polars DataFrame.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Read the header line and split it into column names.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(open(path)?);
    let Some(line) = reader.lines().next() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let line = line.map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let line = line.strip_prefix('\u{feff}').unwrap_or(&line);
    if line.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(parse_header_line(line))
}

/// Split a CSV header line, honoring double-quoted names.
fn parse_header_line(line: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches(['\r', '\n']).chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => names.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    names.push(current);
    names
}

/// Read the export as a DataFrame where every column is a nullable string.
///
/// Empty cells load as null so downstream fill rules can tell "missing"
/// apart from literal text.
pub fn read_occurrence_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;
    let headers = read_csv_headers(path)?;
    if headers.iter().any(|name| name.trim().is_empty()) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read occurrence table"
    );
    Ok(df)
}

/// Columns from `required` that the table does not carry, in `required` order.
pub fn missing_columns(df: &DataFrame, required: &[String]) -> Vec<String> {
    let present: BTreeSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    required
        .iter()
        .filter(|name| !present.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Fail when the export does not satisfy the input column contract.
pub fn validate_required_columns(df: &DataFrame, required: &[String], path: &Path) -> Result<()> {
    let missing = missing_columns(df, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        })
    }
}
