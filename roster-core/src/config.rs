//! Operator config file.
//!
//! # Storage layout
//!
//! ```text
//! ~/.roster/
//!   config.yaml   (store defaults — mode 0600, created on first save)
//!   store/        (default DirStore root when no location is configured)
//! ```
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which store backend the CLI talks to by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// JSON documents in a local directory.
    #[default]
    Dir,
    /// Hosted collection reached over HTTP.
    Http,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Dir => write!(f, "dir"),
            StoreKind::Http => write!(f, "http"),
        }
    }
}

/// Default store connection settings; any CLI flag overrides its field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub kind: StoreKind,
    /// DirStore root path, or HTTP base URL, depending on `kind`.
    pub location: String,
    /// Name of the document collection records land in.
    pub collection: String,
}

/// Root of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub version: u32,
    pub store: StoreSettings,
}

impl Config {
    /// Built-in defaults rooted at `home`: DirStore under `~/.roster/store`,
    /// collection `Candidates`.
    pub fn default_at(home: &Path) -> Self {
        Config {
            version: 1,
            store: StoreSettings {
                kind: StoreKind::Dir,
                location: home.join(".roster").join("store").display().to_string(),
                collection: "Candidates".to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// `<home>/.roster/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".roster").join("config.yaml")
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load the config, falling back to [`Config::default_at`] when the file
/// does not exist yet.
///
/// Returns `ConfigError::Parse` (with path + line context) on malformed YAML.
pub fn load_at(home: &Path) -> Result<Config, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(Config::default_at(home));
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Config, ConfigError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save the config to `<home>/.roster/config.yaml`.
///
/// Write flow: serialize → `.yaml.tmp` sibling → `chmod 0600` → `rename`.
/// `.tmp` lives in the same directory as the target (same filesystem).
pub fn save_at(home: &Path, config: &Config) -> Result<(), ConfigError> {
    let path = config_path_at(home);
    let Some(dir) = path.parent() else {
        return Err(ConfigError::Io(std::io::Error::other(
            "invalid config path",
        )));
    };
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        set_dir_permissions(dir)?;
    }

    let yaml = serde_yaml::to_string(config)?;
    let tmp = path.with_extension("yaml.tmp");
    std::fs::write(&tmp, yaml)?;
    set_file_permissions(&tmp)?;
    std::fs::rename(&tmp, &path)?;
    Ok(())
}

/// `save_at` convenience wrapper.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    save_at(&home()?, config)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
