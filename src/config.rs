//! Command-line configuration shared by every mode

use crate::error::WordleResult;
use crate::storage::{FileStore, MemoryStore, Store};
use crate::wordlists::{ALLOWED, ANSWERS, Dictionary, loader};
use clap::Args;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

const APP_DIR: &str = "wordle_tui";
const SAVE_FILE: &str = "save.json";

#[derive(Args, Debug, Clone)]
pub struct GameConfig {
    /// Save file (default: $XDG_DATA_HOME/wordle_tui/save.json)
    #[arg(long, global = true)]
    pub save_file: Option<PathBuf>,

    /// Play without reading or writing the save file
    #[arg(long, global = true, default_value_t = false)]
    pub no_save: bool,

    /// Answer list to draw from instead of the built-in one (one word per line)
    #[arg(long, global = true)]
    pub answers: Option<PathBuf>,

    /// Guess list to validate against instead of the built-in one
    #[arg(long, global = true)]
    pub allowed: Option<PathBuf>,

    /// How long notices stay on screen, in milliseconds
    #[arg(long, global = true, default_value_t = 1500)]
    pub toast_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_file: None,
            no_save: false,
            answers: None,
            allowed: None,
            toast_ms: 1500,
        }
    }
}

impl GameConfig {
    /// Resolve the save file location
    ///
    /// Order: `--save-file`, `$XDG_DATA_HOME`, `$HOME/.local/share`, then the
    /// current directory.
    #[must_use]
    pub fn save_path(&self) -> PathBuf {
        if let Some(path) = &self.save_file {
            return path.clone();
        }

        let data_home = env::var_os("XDG_DATA_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")));

        match data_home {
            Some(dir) => dir.join(APP_DIR).join(SAVE_FILE),
            None => PathBuf::from("wordle_save.json"),
        }
    }

    /// Build the configured store
    #[must_use]
    pub fn store(&self) -> Box<dyn Store> {
        if self.no_save {
            info!("persistence disabled");
            Box::new(MemoryStore::new())
        } else {
            let path = self.save_path();
            info!(path = %path.display(), "using save file");
            Box::new(FileStore::new(path))
        }
    }

    /// Load the dictionary from override files or the embedded lists
    ///
    /// # Errors
    ///
    /// Returns an error if an override file cannot be read or the resulting
    /// answer list is empty.
    pub fn dictionary(&self) -> WordleResult<Dictionary> {
        let answers = match &self.answers {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(ANSWERS),
        };
        let allowed = match &self.allowed {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(ALLOWED),
        };

        let dictionary = Dictionary::new(answers, allowed)?;
        info!(
            answers = dictionary.answers().len(),
            allowed = dictionary.allowed_count(),
            "dictionary ready"
        );
        Ok(dictionary)
    }

    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}
