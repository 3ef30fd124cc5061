//! Transformation error types.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A stage needs a column the table does not carry (schema mismatch).
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// A configured date exclusion is not a valid regex.
    #[error("invalid date exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
