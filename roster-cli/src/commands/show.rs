//! `roster show` — list the candidates currently in the collection.

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use roster_core::Record;

use super::{home_dir, StoreOpts};

/// Arguments for `roster show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub store: StoreOpts,

    /// Emit machine-readable JSON (full records, original column names).
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "candidate")]
    candidate: String,
    #[tabled(rename = "technology")]
    technology: String,
    #[tabled(rename = "location")]
    location: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "recruiter")]
    recruiter: String,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let home = home_dir()?;
        let store = self.store.open(&home)?;
        let records = store
            .all_records()
            .context("failed to scan the collection")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if records.is_empty() {
            println!("Collection is empty.");
            return Ok(());
        }

        let rows: Vec<CandidateRow> = records.iter().map(to_row).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("{} candidates", records.len());
        Ok(())
    }
}

fn to_row(record: &Record) -> CandidateRow {
    CandidateRow {
        candidate: record.candidate.to_string(),
        technology: record.technology.clone(),
        location: record.location.clone(),
        status: record.status.clone(),
        recruiter: record.recruiter.clone(),
    }
}
