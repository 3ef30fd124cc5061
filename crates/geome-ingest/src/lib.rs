//! VertNet export ingestion.

pub mod error;
pub mod polars_utils;
pub mod reader;

pub use error::{IngestError, Result};
pub use polars_utils::{any_to_opt_string, any_to_string, format_numeric};
pub use reader::{
    missing_columns, read_csv_headers, read_occurrence_table, validate_encoding,
    validate_required_columns,
};
