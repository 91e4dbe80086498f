//! Error types for file intake.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning an uploaded file into a record set.
///
/// Every variant is fatal: when intake fails, validation never runs.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the file from disk.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No delimiter/encoding candidate produced a usable table.
    #[error("could not read {path}: no delimiter/encoding candidate produced a table")]
    Unreadable { path: PathBuf },

    /// The file parsed but contains no data rows.
    #[error("file has no data rows: {path}")]
    EmptyTable { path: PathBuf },

    /// XML document could not be parsed.
    #[error("failed to parse XML {path}: {message}")]
    XmlParse { path: PathBuf, message: String },
}

/// Result type for intake operations.
pub type Result<T> = std::result::Result<T, IngestError>;
