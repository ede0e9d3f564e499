//! Shared utilities for task centrality crates.
//!
//! This crate provides numeric helpers used across the workspace and the
//! Polars helpers behind column statistics.

pub mod numeric;
pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{available, format_numeric, format_optional, is_available, parse_f64};
pub use polars::{column_mean, optional_f64_column};
