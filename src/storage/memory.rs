//! In-memory store for `--no-save` sessions and tests

use super::Store;
use crate::game::Snapshot;
use std::cell::RefCell;
use tracing::warn;

/// Keeps the serialized snapshot in memory
///
/// Goes through the same JSON encoding as [`super::FileStore`], so tests using
/// it exercise the real format.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw (possibly invalid) contents
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
        }
    }

    /// Raw contents of the slot
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Option<Snapshot> {
        let contents = self.contents.borrow();
        let json = contents.as_deref()?;

        serde_json::from_str(json)
            .inspect_err(|e| warn!(error = %e, "ignoring unreadable in-memory save"))
            .ok()
    }

    fn save(&self, snapshot: &Snapshot) {
        match serde_json::to_string(snapshot) {
            Ok(json) => *self.contents.borrow_mut() = Some(json),
            Err(e) => warn!(error = %e, "failed to encode game"),
        }
    }
}
