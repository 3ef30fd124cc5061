//! Chunked CSV output for GEOME bulk upload.

pub mod chunks;
pub mod error;
pub mod writer;

pub use chunks::{chunk_bounds, chunk_file_name};
pub use error::{OutputError, Result};
pub use writer::{ChunkFile, ChunkOptions, plan_chunks, write_chunks};
