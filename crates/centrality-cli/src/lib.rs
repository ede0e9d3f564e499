//! Library side of the `centrality` binary: logging, weight configuration,
//! and the staged pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
