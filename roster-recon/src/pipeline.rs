//! End-to-end import pipeline: read → parse → validate → reconcile.
//!
//! This is the single entrypoint the CLI uses; library consumers that
//! already hold the CSV bytes can call [`run_str`] instead of [`run`].
//! Validation happens entirely before the first store call, so a schema or
//! parse failure never leaves partial mutations behind.

use std::path::Path;

use chrono::{DateTime, Utc};

use roster_ingest::IngestError;

use crate::error::ImportError;
use crate::reconcile::{reconcile, Outcome, ReconMode};
use crate::store::CandidateStore;

/// Summary of one import run.
#[derive(Debug)]
pub struct ImportReport {
    /// When the run started.
    pub run_at: DateTime<Utc>,
    /// One outcome per input record, in input order.
    pub outcomes: Vec<Outcome>,
}

impl ImportReport {
    pub fn inserted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Inserted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn would_insert(&self) -> usize {
        self.count(|o| matches!(o, Outcome::WouldInsert { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Import the CSV file at `path` into `store`.
pub fn run(
    path: &Path,
    store: &mut dyn CandidateStore,
    mode: ReconMode,
) -> Result<ImportReport, ImportError> {
    let table = roster_ingest::read_path(path)?;
    run_table_inner(table, store, mode)
}

/// Import in-memory CSV data into `store`.
pub fn run_str(
    data: &str,
    store: &mut dyn CandidateStore,
    mode: ReconMode,
) -> Result<ImportReport, ImportError> {
    let table = roster_ingest::parse_str(data)?;
    run_table_inner(table, store, mode)
}

fn run_table_inner(
    table: roster_ingest::RawTable,
    store: &mut dyn CandidateStore,
    mode: ReconMode,
) -> Result<ImportReport, ImportError> {
    let run_at = Utc::now();
    let batch = roster_ingest::validate(&table).map_err(IngestError::from)?;
    let outcomes = reconcile(&batch, store, mode)?;
    log::info!(
        "import finished: {} records, {} inserted, {} skipped",
        batch.len(),
        outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Inserted { .. }))
            .count(),
        outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Skipped { .. }))
            .count(),
    );
    Ok(ImportReport { run_at, outcomes })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use roster_core::schema::REQUIRED_COLUMNS;
    use roster_core::CandidateName;

    use super::*;
    use crate::reconcile::test_support::sample_record;
    use crate::store::MemoryStore;

    /// CSV with the full canonical header and one row per name.
    fn csv_for(names: &[&str]) -> String {
        let mut out = REQUIRED_COLUMNS.join(",") + "\n";
        for name in names {
            let row: Vec<String> = REQUIRED_COLUMNS
                .iter()
                .map(|c| {
                    if *c == "Candidate" {
                        (*name).to_string()
                    } else {
                        format!("{c} of {name}")
                    }
                })
                .collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }

    #[test]
    fn end_to_end_skips_existing_and_inserts_novel() {
        // Store pre-populated with Alice; batch is [Alice, Bob].
        let mut store = MemoryStore::with_records([sample_record("Alice")]);
        let report = run_str(&csv_for(&["Alice", "Bob"]), &mut store, ReconMode::Commit)
            .expect("import");

        assert!(matches!(
            report.outcomes[0],
            Outcome::Skipped { ref candidate } if candidate == &CandidateName::from("Alice")
        ));
        assert!(matches!(
            report.outcomes[1],
            Outcome::Inserted { ref candidate, .. } if candidate == &CandidateName::from("Bob")
        ));
        assert_eq!(report.inserted(), 1);
        assert_eq!(report.skipped(), 1);

        assert_eq!(store.insert_calls(), 1);
        let names: Vec<String> = store
            .records()
            .map(|r| r.candidate.to_string())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn schema_error_happens_before_any_store_call() {
        let mut store = MemoryStore::new();
        // Header missing the Visa column.
        let headers: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "Visa")
            .collect();
        let data = headers.join(",") + "\n";

        let err = run_str(&data, &mut store, ReconMode::Commit).expect_err("must fail");
        assert!(err.to_string().contains("Visa"));
        assert_eq!(store.insert_calls(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_input_surfaces_like_schema_error() {
        let mut store = MemoryStore::new();
        let data = csv_for(&["Alice"]) + "short,row\n";
        let err = run_str(&data, &mut store, ReconMode::Commit).expect_err("must fail");
        assert!(matches!(
            err,
            ImportError::Ingest(IngestError::Malformed(_))
        ));
        assert_eq!(store.insert_calls(), 0);
    }

    #[test]
    fn empty_batch_is_valid_and_mutates_nothing() {
        let mut store = MemoryStore::new();
        let report = run_str(&csv_for(&[]), &mut store, ReconMode::Commit).expect("import");
        assert!(report.outcomes.is_empty());
        assert_eq!(store.insert_calls(), 0);
    }

    #[test]
    fn dry_run_reports_without_mutating() {
        let mut store = MemoryStore::with_records([sample_record("Alice")]);
        let report = run_str(&csv_for(&["Alice", "Bob"]), &mut store, ReconMode::DryRun)
            .expect("import");
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.would_insert(), 1);
        assert_eq!(report.inserted(), 0);
        assert_eq!(store.insert_calls(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn file_based_run_matches_in_memory_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("batch.csv");
        std::fs::write(&path, csv_for(&["Carol"])).unwrap();

        let mut store = MemoryStore::new();
        let report = run(&path, &mut store, ReconMode::Commit).expect("import");
        assert_eq!(report.inserted(), 1);
        assert_eq!(store.len(), 1);
    }
}
