//! Error types for roster-ingest.

use std::path::PathBuf;

use thiserror::Error;

use roster_core::SchemaError;

/// All errors that can arise while turning an input file into records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input cannot be parsed as tabular data at all (bad encoding,
    /// ragged rows, …). No partial validation is attempted.
    #[error("malformed input: {0}")]
    Malformed(#[from] csv::Error),

    /// Parsed fine but violates the required-column schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Convenience constructor for [`IngestError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> IngestError {
    IngestError::Io {
        path: path.into(),
        source,
    }
}
