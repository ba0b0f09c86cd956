//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the source workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Workbook could not be opened or its format is not recognized.
    #[error("failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Workbook contains no worksheets.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    /// First worksheet could not be parsed.
    #[error("failed to read worksheet from {path}: {source}")]
    WorksheetRead {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Configuration reached the reader without a source column map.
    #[error("client configuration has no source column map")]
    MissingColumnMap,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
