use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML mapping {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing column '{column}' in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("invalid mapping {path}: {message}")]
    InvalidMapping { path: PathBuf, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
