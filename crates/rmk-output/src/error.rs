use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the output XML file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file could not be created or written.
    #[error("failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
