//! JSON file store

use super::Store;
use crate::error::WordleResult;
use crate::game::Snapshot;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stores the snapshot as a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the save file; `Ok(None)` when it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn try_load(&self) -> WordleResult<Option<Snapshot>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Encode and write the snapshot, creating parent directories as needed
    ///
    /// The file is replaced via rename so a crash never leaves half a save.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written.
    pub fn try_save(&self, snapshot: &Snapshot) -> WordleResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Store for FileStore {
    fn load(&self) -> Option<Snapshot> {
        self.try_load()
            .inspect_err(|e| warn!(path = %self.path.display(), error = %e, "cannot load saved game"))
            .ok()
            .flatten()
    }

    fn save(&self, snapshot: &Snapshot) {
        match self.try_save(snapshot) {
            Ok(()) => debug!(path = %self.path.display(), "game saved"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "cannot save game"),
        }
    }
}
