use std::path::PathBuf;

use geome_output::ChunkFile;

/// Row counts and chunk files of one `map` run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub input_rows: usize,
    /// Rows directly after the unpivot, before filtering.
    pub long_rows: usize,
    pub final_rows: usize,
    pub dropped_rows: usize,
    pub chunks: Vec<ChunkFile>,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn chunk_rows(&self) -> usize {
        self.chunks.iter().map(|chunk| chunk.rows).sum()
    }
}
