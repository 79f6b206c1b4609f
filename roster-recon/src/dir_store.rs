//! Directory-backed store — one JSON document per record.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   <collection>/
//!     000001.json   (one record per file, pretty-printed)
//!     000002.json
//! ```
//!
//! Writes use the same atomic `.tmp` + rename pattern as the config file.
//! Document ids are the zero-padded file stems, assigned sequentially from a
//! scan of what is already on disk.

use std::path::{Path, PathBuf};

use roster_core::Record;

use crate::error::{io_err, StoreError};
use crate::store::{CandidateStore, DocumentId};

/// Local filesystem implementation of [`CandidateStore`].
#[derive(Debug)]
pub struct DirStore {
    collection_dir: PathBuf,
}

impl DirStore {
    /// Open (creating if needed) the collection directory under `root`.
    pub fn open(root: &Path, collection: &str) -> Result<Self, StoreError> {
        let collection_dir = root.join(collection);
        std::fs::create_dir_all(&collection_dir).map_err(|e| io_err(&collection_dir, e))?;
        Ok(Self { collection_dir })
    }

    /// `<root>/<collection>/<id>.json` — pure, no I/O.
    pub fn document_path(&self, id: &DocumentId) -> PathBuf {
        self.collection_dir.join(format!("{id}.json"))
    }

    /// Sorted paths of every persisted document. Skips `.tmp` leftovers and
    /// anything that is not a `.json` file.
    fn document_paths(&self) -> Result<Vec<PathBuf>, StoreError> {
        if !self.collection_dir.exists() {
            return Ok(vec![]);
        }
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.collection_dir)
            .map_err(|e| io_err(&self.collection_dir, e))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Next sequential id: one past the highest numeric stem on disk.
    fn next_id(&self) -> Result<DocumentId, StoreError> {
        let max = self
            .document_paths()?
            .iter()
            .filter_map(|p| p.file_stem())
            .filter_map(|s| s.to_str())
            .filter_map(|s| s.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Ok(DocumentId(format!("{:06}", max + 1)))
    }
}

impl CandidateStore for DirStore {
    fn all_records(&self) -> Result<Vec<Record>, StoreError> {
        let mut records = Vec::new();
        for path in self.document_paths()? {
            let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            records.push(serde_json::from_str(&contents)?);
        }
        Ok(records)
    }

    fn insert(&mut self, record: &Record) -> Result<DocumentId, StoreError> {
        let id = self.next_id()?;
        let path = self.document_path(&id);
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(&path, e));
        }
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
