//! Error types for VertNet data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the VertNet export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File uses an encoding we cannot read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty (no header line).
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A header cell is blank.
    #[error("CSV file has an empty column name: {path}")]
    EmptyColumnName { path: PathBuf },

    /// The export does not carry every column the mapping needs.
    #[error("{path} is missing required columns: {}", missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
