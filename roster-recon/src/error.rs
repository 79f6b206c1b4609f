//! Error types for roster-recon.

use std::path::PathBuf;

use thiserror::Error;

use roster_ingest::IngestError;

/// A read or write against the collection store failed.
///
/// Fatal to the remainder of a reconciliation run; inserts already applied
/// in the same run stand. Never retried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or gave an unusable response. Carries
    /// the underlying transport error text.
    #[error("store unavailable: {detail}")]
    Unavailable { detail: String },

    /// An I/O error from a directory-backed store, with annotated path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored document failed to serialize or parse.
    #[error("document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`StoreError::Unavailable`].
pub(crate) fn unavailable(detail: impl Into<String>) -> StoreError {
    StoreError::Unavailable {
        detail: detail.into(),
    }
}

/// Anything that can stop an end-to-end import run.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Input could not be read, parsed, or validated. No store mutation has
    /// happened when this is raised.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The store failed mid-run; prior inserts are not rolled back.
    #[error(transparent)]
    Store(#[from] StoreError),
}
