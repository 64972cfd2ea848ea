//! CLI error types.

use std::path::PathBuf;

use folio_analytics::AnalyticsError;
use folio_core::FolioError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be read.
    #[error("Cannot read {path}: {source}")]
    ReadInput {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An input file is not valid JSON for the expected records.
    #[error("Invalid JSON in {path}: {source}")]
    ParseInput {
        /// The file that failed.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// A record in an input file failed validation.
    #[error("Invalid record {index} in {path}: {source}")]
    InvalidRecord {
        /// The file containing the record.
        path: PathBuf,
        /// Zero-based record position.
        index: usize,
        /// The validation error.
        source: FolioError,
    },

    /// Unknown configuration key.
    #[error("Unknown configuration key: {0}")]
    UnknownConfigKey(String),

    /// Invalid configuration value.
    #[error("Invalid value for {key}: {reason}")]
    InvalidConfigValue {
        /// The configuration key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Configuration file problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analytics error.
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Core validation error.
    #[error(transparent)]
    Core(#[from] FolioError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
