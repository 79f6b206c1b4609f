//! `roster import <file>` — validate, then reconcile into the collection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use roster_recon::{pipeline, Outcome, ReconMode};

use super::{home_dir, StoreOpts};

/// Arguments for `roster import`.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the candidate CSV file.
    pub file: PathBuf,

    #[command(flatten)]
    pub store: StoreOpts,

    /// Classify every row without writing anything to the store.
    #[arg(long)]
    pub dry_run: bool,
}

impl ImportArgs {
    pub fn run(self) -> Result<()> {
        let home = home_dir()?;
        let mut store = self.store.open(&home)?;
        let mode = if self.dry_run {
            ReconMode::DryRun
        } else {
            ReconMode::Commit
        };

        let report = pipeline::run(&self.file, store.as_mut(), mode)
            .with_context(|| format!("import failed for '{}'", self.file.display()))?;

        print_report(&self.file, &report, self.dry_run);
        Ok(())
    }
}

fn print_report(file: &Path, report: &pipeline::ImportReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    if report.outcomes.is_empty() {
        println!(
            "{prefix}{} '{}' — empty batch, nothing to do",
            "✓".green(),
            file.display()
        );
        return;
    }

    if dry_run {
        println!(
            "{prefix}{} '{}' checked ({} would insert, {} already present)",
            "✓".green(),
            file.display(),
            report.would_insert(),
            report.skipped()
        );
    } else {
        println!(
            "{prefix}{} '{}' imported ({} inserted, {} skipped)",
            "✓".green(),
            file.display(),
            report.inserted(),
            report.skipped()
        );
    }

    for outcome in &report.outcomes {
        match outcome {
            Outcome::Inserted { candidate, id } => println!("  +  {candidate} ({id})"),
            Outcome::WouldInsert { candidate } => println!("  ~  {candidate}"),
            Outcome::Skipped { candidate } => println!("  ·  {candidate} (already present)"),
        }
    }
}
