//! Subcommand implementations, plus the store-selection flags shared by
//! every command that talks to a collection store.

pub mod config;
pub mod import;
pub mod show;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use roster_core::config::{self as roster_config, StoreKind};
use roster_recon::{CandidateStore, DirStore, HttpStore};

/// Store connection flags. Anything not given falls back to
/// `~/.roster/config.yaml`, then to built-in defaults.
#[derive(Args, Debug)]
pub struct StoreOpts {
    /// Use a local directory store rooted at this path.
    #[arg(long, value_name = "PATH", conflicts_with = "store_url")]
    pub store_dir: Option<PathBuf>,

    /// Use a hosted store at this base URL.
    #[arg(long, value_name = "URL")]
    pub store_url: Option<String>,

    /// Collection the records live in.
    #[arg(long, value_name = "NAME")]
    pub collection: Option<String>,
}

impl StoreOpts {
    /// Resolve flags + config into an opened store handle.
    pub fn open(&self, home: &Path) -> Result<Box<dyn CandidateStore>> {
        let config = roster_config::load_at(home).context("failed to load ~/.roster/config.yaml")?;
        let collection = self
            .collection
            .clone()
            .unwrap_or_else(|| config.store.collection.clone());

        if let Some(url) = &self.store_url {
            return Ok(Box::new(HttpStore::new(url, &collection)));
        }
        if let Some(dir) = &self.store_dir {
            let store = DirStore::open(dir, &collection)
                .with_context(|| format!("cannot open store at '{}'", dir.display()))?;
            return Ok(Box::new(store));
        }

        match config.store.kind {
            StoreKind::Http => Ok(Box::new(HttpStore::new(
                &config.store.location,
                &collection,
            ))),
            StoreKind::Dir => {
                let root = PathBuf::from(&config.store.location);
                let store = DirStore::open(&root, &collection)
                    .with_context(|| format!("cannot open store at '{}'", root.display()))?;
                Ok(Box::new(store))
            }
        }
    }
}

/// Home directory for config lookup; every command resolves it the same way.
pub(crate) fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("could not determine home directory")
}
