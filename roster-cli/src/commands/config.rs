//! `roster config` — inspect or change the defaults in ~/.roster/config.yaml.

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use roster_core::config::{self, StoreKind};

use super::home_dir;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration.
    Show,

    /// Update one or more fields and save the file.
    Set {
        /// Store backend: dir | http.
        #[arg(long, value_name = "KIND")]
        kind: Option<String>,

        /// DirStore root path, or HTTP base URL.
        #[arg(long, value_name = "PATH-OR-URL")]
        location: Option<String>,

        /// Collection name records land in.
        #[arg(long, value_name = "NAME")]
        collection: Option<String>,
    },
}

pub fn run(command: ConfigCommand) -> Result<()> {
    let home = home_dir()?;
    match command {
        ConfigCommand::Show => {
            let cfg = config::load_at(&home).context("failed to load config")?;
            println!("store.kind:       {}", cfg.store.kind);
            println!("store.location:   {}", cfg.store.location);
            println!("store.collection: {}", cfg.store.collection);
            Ok(())
        }
        ConfigCommand::Set {
            kind,
            location,
            collection,
        } => {
            let mut cfg = config::load_at(&home).context("failed to load config")?;
            if let Some(kind) = kind {
                cfg.store.kind = parse_kind(&kind)?;
            }
            if let Some(location) = location {
                cfg.store.location = location;
            }
            if let Some(collection) = collection {
                cfg.store.collection = collection;
            }
            config::save_at(&home, &cfg).context("failed to save config")?;
            println!("✓ Saved ~/.roster/config.yaml");
            Ok(())
        }
    }
}

fn parse_kind(s: &str) -> Result<StoreKind> {
    match s.to_ascii_lowercase().as_str() {
        "dir" => Ok(StoreKind::Dir),
        "http" => Ok(StoreKind::Http),
        other => bail!("unknown store kind '{other}'; expected: dir, http"),
    }
}
