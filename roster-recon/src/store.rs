//! The store seam.
//!
//! Reconciliation never talks to a concrete backend; it takes a
//! `&mut dyn CandidateStore`. The trait is the minimal capability pair the
//! algorithm needs: one full-collection scan, one append. [`MemoryStore`]
//! is the substitute implementation used throughout the tests and counts its
//! insert calls so tests can assert exactly how many writes a run issued.

use std::fmt;

use roster_core::Record;

use crate::error::{unavailable, StoreError};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Store-assigned identity of one persisted document.
///
/// Assigned by the backend on insert, independent of the record's fields;
/// in particular it is NOT derived from the candidate name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A keyed document collection the reconciler can scan and append to.
///
/// The store does not enforce candidate-name uniqueness; that is the
/// reconciler's (best-effort, snapshot-based) job.
pub trait CandidateStore {
    /// Full-collection scan returning every current record.
    ///
    /// O(collection size); the reconciler calls this exactly once per run,
    /// unconditionally, to build its key snapshot.
    fn all_records(&self) -> Result<Vec<Record>, StoreError>;

    /// Append one record; the store assigns and returns its identity.
    fn insert(&mut self, record: &Record) -> Result<DocumentId, StoreError>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store: the test substitute and a scratch backend.
///
/// Tracks how many `insert` calls were made, and can be armed to fail after
/// a set number of successful inserts to exercise mid-run store failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Vec<(DocumentId, Record)>,
    insert_calls: usize,
    fail_inserts_after: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `records`, as if from a prior run.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut store = Self::new();
        for record in records {
            let id = store.next_id();
            store.docs.push((id, record));
        }
        store
    }

    /// Every insert fails with [`StoreError::Unavailable`] once the store
    /// holds `n` documents.
    pub fn fail_inserts_after(&mut self, n: usize) {
        self.fail_inserts_after = Some(n);
    }

    /// Number of `insert` calls received, successful or not.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.docs.iter().map(|(_, r)| r)
    }

    fn next_id(&self) -> DocumentId {
        DocumentId(format!("mem-{:06}", self.docs.len() + 1))
    }
}

impl CandidateStore for MemoryStore {
    fn all_records(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.records().cloned().collect())
    }

    fn insert(&mut self, record: &Record) -> Result<DocumentId, StoreError> {
        self.insert_calls += 1;
        if let Some(allowed) = self.fail_inserts_after {
            if self.docs.len() >= allowed {
                return Err(unavailable("injected insert failure"));
            }
        }
        let id = self.next_id();
        self.docs.push((id.clone(), record.clone()));
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
