//! Error types for ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading a sheet into records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The sheet path does not exist or is not a file.
    #[error("sheet not found: {path}")]
    SheetNotFound { path: PathBuf },

    /// The sheet could not be read or parsed.
    #[error("failed to read sheet: {path}")]
    SheetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The sheet contains no header row (empty file or all-blank rows).
    #[error("sheet has no header row: {path}")]
    EmptySheet { path: PathBuf },

    /// The sheet format could not be detected from the file extension.
    #[error("cannot detect sheet format from extension: {path}")]
    UnknownFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
