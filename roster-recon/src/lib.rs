//! # roster-recon
//!
//! Reconciliation of a validated candidate batch against a keyed document
//! collection: read the existing key set once, then insert every novel
//! record, skipping keys already present.
//!
//! Call [`pipeline::run`] for the whole read → validate → reconcile flow, or
//! [`reconcile`] directly with a batch you already hold. Stores are passed
//! explicitly as [`CandidateStore`] handles — never ambient state — so any
//! backend ([`MemoryStore`], [`DirStore`], [`HttpStore`]) slots in.

pub mod dir_store;
pub mod error;
pub mod http_store;
pub mod pipeline;
pub mod reconcile;
pub mod store;

pub use dir_store::DirStore;
pub use error::{ImportError, StoreError};
pub use http_store::HttpStore;
pub use pipeline::{run, run_str, ImportReport};
pub use reconcile::{reconcile, Outcome, ReconMode};
pub use store::{CandidateStore, DocumentId, MemoryStore};
