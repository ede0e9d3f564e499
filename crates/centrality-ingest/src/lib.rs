//! Ingestion of long-format task ratings.

pub mod error;
pub mod ratings;

pub use error::{IngestError, Result};
pub use ratings::{
    IngestOptions, SourceColumn, delimiter_for_path, read_rating_records,
    read_rating_records_from_reader,
};
