//! `roster validate <file>` — schema check only, no store access.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use roster_core::schema::AVATAR_URL_COLUMN;

/// Arguments for `roster validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the candidate CSV file.
    pub file: PathBuf,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let table = roster_ingest::read_path(&self.file)
            .with_context(|| format!("cannot read '{}'", self.file.display()))?;
        let synthesizing = table.column(AVATAR_URL_COLUMN).is_none();
        let records = roster_ingest::validate(&table)
            .with_context(|| format!("'{}' failed validation", self.file.display()))?;

        println!(
            "{} '{}' is valid ({} records)",
            "✓".green(),
            self.file.display(),
            records.len()
        );
        if synthesizing {
            println!(
                "  '{AVATAR_URL_COLUMN}' column absent; avatar URLs will be synthesized on import"
            );
        }
        Ok(())
    }
}
