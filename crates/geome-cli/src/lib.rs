//! CLI library components for the VertNet to GEOME mapper.

pub mod logging;
pub mod pipeline;
pub mod types;
