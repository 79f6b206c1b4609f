//! HTTP-backed store — client for a hosted document collection.
//!
//! # Wire format
//!
//! ```text
//! GET  {base}/v1/collections/{collection}/documents
//!      → 200 {"documents": [{"id": "…", "fields": {…record…}}, …]}
//!
//! POST {base}/v1/collections/{collection}/documents
//!      body {"fields": {…record…}}
//!      → 200 {"id": "…"}
//! ```
//!
//! The server assigns document ids; this client never sends one. Every
//! transport or decode failure maps to [`StoreError::Unavailable`] carrying
//! the underlying error text. No retries, no backoff: a failed call fails
//! the reconciliation run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use roster_core::Record;

use crate::error::{unavailable, StoreError};
use crate::store::{CandidateStore, DocumentId};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DocumentPayload {
    #[allow(dead_code)] // ids are server-side bookkeeping; the scan only needs fields
    id: String,
    fields: Record,
}

#[derive(Debug, Deserialize)]
struct DocumentsResponse {
    documents: Vec<DocumentPayload>,
}

#[derive(Debug, Serialize)]
struct InsertRequest<'a> {
    fields: &'a Record,
}

#[derive(Debug, Deserialize)]
struct InsertResponse {
    id: String,
}

// ---------------------------------------------------------------------------
// HttpStore
// ---------------------------------------------------------------------------

/// Remote implementation of [`CandidateStore`] over HTTP.
pub struct HttpStore {
    agent: ureq::Agent,
    base_url: String,
    collection: String,
}

impl HttpStore {
    /// Client for `collection` hosted at `base_url` (scheme + host, with or
    /// without a trailing slash).
    pub fn new(base_url: &str, collection: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
        }
    }

    /// `{base}/v1/collections/{collection}/documents` — pure, no I/O.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/v1/collections/{}/documents",
            self.base_url, self.collection
        )
    }
}

impl CandidateStore for HttpStore {
    fn all_records(&self) -> Result<Vec<Record>, StoreError> {
        let url = self.documents_url();
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| unavailable(e.to_string()))?;
        let body: DocumentsResponse = response
            .into_json()
            .map_err(|e| unavailable(format!("invalid scan response: {e}")))?;
        Ok(body.documents.into_iter().map(|d| d.fields).collect())
    }

    fn insert(&mut self, record: &Record) -> Result<DocumentId, StoreError> {
        let url = self.documents_url();
        let body =
            serde_json::to_value(InsertRequest { fields: record }).map_err(StoreError::Json)?;
        let response = self
            .agent
            .post(&url)
            .send_json(body)
            .map_err(|e| unavailable(e.to_string()))?;
        let body: InsertResponse = response
            .into_json()
            .map_err(|e| unavailable(format!("invalid insert response: {e}")))?;
        Ok(DocumentId(body.id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
