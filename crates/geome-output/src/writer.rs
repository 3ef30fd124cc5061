//! CSV chunk writer.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info};

use crate::chunks::{chunk_bounds, chunk_file_name};
use crate::error::{OutputError, Result};

/// Where the table goes and how it is split.
#[derive(Debug, Clone)]
pub struct ChunkOptions {
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub chunk_count: usize,
}

/// One chunk file, written or planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Compute the chunk files without touching the filesystem.
pub fn plan_chunks(df: &DataFrame, options: &ChunkOptions) -> Result<Vec<ChunkFile>> {
    let bounds = chunk_bounds(df.height(), options.chunk_count)?;
    Ok(bounds
        .iter()
        .enumerate()
        .map(|(idx, range)| ChunkFile {
            path: options
                .output_dir
                .join(chunk_file_name(&options.file_prefix, idx + 1)),
            rows: range.len(),
        })
        .collect())
}

/// Write every chunk as a headed CSV, creating the output directory if needed.
///
/// Empty chunks are still written so the file set is always complete.
pub fn write_chunks(df: &DataFrame, options: &ChunkOptions) -> Result<Vec<ChunkFile>> {
    ensure_output_dir(&options.output_dir)?;
    let bounds = chunk_bounds(df.height(), options.chunk_count)?;
    let mut written = Vec::with_capacity(bounds.len());
    for (idx, range) in bounds.into_iter().enumerate() {
        let path = options
            .output_dir
            .join(chunk_file_name(&options.file_prefix, idx + 1));
        let mut chunk = df.slice(range.start as i64, range.len());
        write_csv(&mut chunk, &path)?;
        debug!(path = %path.display(), rows = chunk.height(), "wrote chunk");
        written.push(ChunkFile {
            path,
            rows: chunk.height(),
        });
    }
    info!(
        dir = %options.output_dir.display(),
        files = written.len(),
        rows = df.height(),
        "wrote output chunks"
    );
    Ok(written)
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })
}
