//! The Reconciler.
//!
//! ## Algorithm
//!
//! 1. Scan the store once and snapshot the set of existing candidate names.
//! 2. Walk the batch in input order: key in snapshot → [`Outcome::Skipped`],
//!    no mutation; otherwise insert and emit [`Outcome::Inserted`].
//! 3. Any store failure aborts the rest of the run. Prior inserts stand —
//!    no transactional scope spans the batch.
//!
//! The snapshot is never refreshed during the run, and a freshly inserted
//! key is NOT added to it: two records sharing a key within one batch are
//! both treated as novel and both inserted. Deduplication only happens
//! against the state captured before the loop began.

use std::collections::HashSet;

use roster_core::{CandidateName, Record};

use crate::error::StoreError;
use crate::store::{CandidateStore, DocumentId};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Per-record result of one reconciliation run. Consumed for reporting only;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key was novel; the record was appended to the store.
    Inserted {
        candidate: CandidateName,
        id: DocumentId,
    },
    /// The key was already present in the snapshot; nothing was written.
    Skipped { candidate: CandidateName },
    /// Dry-run mode: the key is novel and *would* be inserted.
    WouldInsert { candidate: CandidateName },
}

impl Outcome {
    pub fn candidate(&self) -> &CandidateName {
        match self {
            Outcome::Inserted { candidate, .. }
            | Outcome::Skipped { candidate }
            | Outcome::WouldInsert { candidate } => candidate,
        }
    }
}

/// Whether reconciliation writes to the store or only reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconMode {
    /// Insert novel records.
    #[default]
    Commit,
    /// Take the snapshot and classify the batch, but never call `insert`.
    DryRun,
}

// ---------------------------------------------------------------------------
// reconcile
// ---------------------------------------------------------------------------

/// Reconcile `batch` against `store`: one [`Outcome`] per record, in input
/// order.
///
/// The full-collection scan happens exactly once, up front, regardless of
/// batch size; an empty batch still performs it and returns an empty outcome
/// list.
pub fn reconcile(
    batch: &[Record],
    store: &mut dyn CandidateStore,
    mode: ReconMode,
) -> Result<Vec<Outcome>, StoreError> {
    let existing: HashSet<CandidateName> = store
        .all_records()?
        .into_iter()
        .map(|r| r.candidate)
        .collect();
    log::debug!(
        "snapshot holds {} existing candidates; batch has {} records",
        existing.len(),
        batch.len()
    );

    let mut outcomes = Vec::with_capacity(batch.len());
    for record in batch {
        let candidate = record.candidate.clone();
        if existing.contains(&candidate) {
            log::debug!("skipping existing candidate: {candidate}");
            outcomes.push(Outcome::Skipped { candidate });
            continue;
        }
        match mode {
            ReconMode::DryRun => {
                log::info!("[dry-run] would insert candidate: {candidate}");
                outcomes.push(Outcome::WouldInsert { candidate });
            }
            ReconMode::Commit => {
                let id = store.insert(record)?;
                log::info!("inserted candidate {candidate} as {id}");
                outcomes.push(Outcome::Inserted { candidate, id });
            }
        }
        // The new key is deliberately not added to `existing`; see module docs.
    }
    Ok(outcomes)
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support {
    use roster_core::{CandidateName, Record};

    /// A fully-populated record keyed by `name`.
    pub(crate) fn sample_record(name: &str) -> Record {
        Record {
            candidate: CandidateName::from(name),
            email: format!("{}@example.com", name.to_lowercase()),
            location: "Austin, TX".into(),
            manager: "R. Vega".into(),
            marketing_start_date: "2024-03-01".into(),
            open_to_relocate: "Yes".into(),
            phone_number: "512-555-0100".into(),
            avatar_url: "https://example.com/avatar_3.jpg".into(),
            recruiter: "D. Okafor".into(),
            status: "Marketing".into(),
            team_lead: "S. Ahmed".into(),
            technology: "Java".into(),
            upfront: "No".into(),
            visa: "H1B".into(),
            branch: "Dallas".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
