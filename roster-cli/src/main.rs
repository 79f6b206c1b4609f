//! Roster — candidate CSV import CLI.
//!
//! # Usage
//!
//! ```text
//! roster validate <file>
//! roster import <file> [--dry-run] [--store-dir <path> | --store-url <url>] [--collection <name>]
//! roster show [--json] [--store-dir <path> | --store-url <url>] [--collection <name>]
//! roster config show
//! roster config set [--kind dir|http] [--location <path-or-url>] [--collection <name>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config::ConfigCommand, import::ImportArgs, show::ShowArgs, validate::ValidateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Import candidate roster CSVs into a keyed document collection",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a CSV file against the required-column schema without touching
    /// any store.
    Validate(ValidateArgs),

    /// Validate a CSV file and reconcile its rows into the collection:
    /// skip candidates already present, insert the rest.
    Import(ImportArgs),

    /// List the candidates currently in the collection.
    Show(ShowArgs),

    /// Inspect or change the defaults in ~/.roster/config.yaml.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate(args) => args.run(),
        Commands::Import(args) => args.run(),
        Commands::Show(args) => args.run(),
        Commands::Config { command } => commands::config::run(command),
    }
}
