//! Error types for rating ingestion.

use std::path::PathBuf;

use centrality_model::CentralityError;
use thiserror::Error;

/// Errors that can occur while reading the ratings table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text.
    #[error("failed to parse {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {source_name}")]
    MissingColumn {
        column: &'static str,
        source_name: String,
    },

    /// Cell that cannot be read as the expected type.
    #[error("invalid {column} value '{value}' at line {line}")]
    InvalidValue {
        column: &'static str,
        value: String,
        line: u64,
    },

    /// Row that violates the scale/category rules.
    #[error("invalid rating at line {line}: {source}")]
    InvalidRating {
        line: u64,
        #[source]
        source: CentralityError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
