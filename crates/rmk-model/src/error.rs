use thiserror::Error;

/// Client-configuration validation failures.
#[derive(Debug, Error)]
pub enum ModelError {
    /// `RsaClientId` is missing or empty.
    #[error("client configuration is missing required RsaClientId value")]
    MissingClientId,

    /// `NumberOfHeaderRows` is negative.
    #[error("invalid number of header rows configured: '{value}'")]
    InvalidHeaderRows { value: i64 },

    /// `SourceColumnMap` is absent from the configuration.
    #[error("client configuration is missing required source column map")]
    MissingColumnMap,

    /// The column map has no `AccountNumber` entry.
    #[error("source column map is missing required AccountNumber column mapping")]
    MissingAccountNumberColumn,
}

pub type Result<T> = std::result::Result<T, ModelError>;
