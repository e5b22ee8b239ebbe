//! Single-slot persistence for the current game
//!
//! Storage is best-effort. Both operations swallow their failures (after
//! logging them) so a broken disk or a hand-edited save file can never stop
//! a game from being played.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::game::{GameState, Snapshot};
use crate::wordlists::Dictionary;
use rand::Rng;
use tracing::{info, warn};

/// Where the game snapshot lives between runs
pub trait Store {
    /// Read the saved game; `None` when nothing usable is stored
    fn load(&self) -> Option<Snapshot>;

    /// Replace the saved game
    fn save(&self, snapshot: &Snapshot);
}

/// Resume the saved game, or start a new one if there is none or it is invalid
pub fn resume_or_new<S, R>(store: &S, dictionary: &Dictionary, rng: &mut R) -> GameState
where
    S: Store + ?Sized,
    R: Rng,
{
    let Some(snapshot) = store.load() else {
        return GameState::new(dictionary, rng);
    };

    match GameState::restore(&snapshot) {
        Ok(state) => {
            info!(guesses = state.guesses().len(), "resumed saved game");
            state
        }
        Err(e) => {
            warn!(error = %e, "discarding saved game");
            GameState::new(dictionary, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Event;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dict() -> Dictionary {
        Dictionary::new(words_from_slice(&["crane", "slate"]), []).unwrap()
    }

    #[test]
    fn empty_store_starts_fresh() {
        let store = MemoryStore::new();
        let state = resume_or_new(&store, &dict(), &mut StdRng::seed_from_u64(3));
        assert!(state.guesses().is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn saved_game_is_resumed() {
        let dict = dict();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = GameState::with_answer(Word::new("slate").unwrap());
        for event in "crane".chars().map(Event::Letter).chain([Event::Submit]) {
            state = state.apply(event, &dict, &mut rng).state;
        }

        let store = MemoryStore::new();
        store.save(&state.snapshot());

        let resumed = resume_or_new(&store, &dict, &mut rng);
        assert_eq!(resumed, state);
    }

    #[test]
    fn corrupted_save_starts_fresh() {
        for contents in ["", "not json", "{\"answer\":\"slate\"}", "[1,2,3]"] {
            let store = MemoryStore::with_contents(contents);
            let state = resume_or_new(&store, &dict(), &mut StdRng::seed_from_u64(3));
            assert!(state.guesses().is_empty(), "{contents:?}");
        }
    }

    #[test]
    fn inconsistent_save_starts_fresh() {
        let json = r#"{"answer":"slate","guesses":["crane"],"statuses":{},"isOver":false}"#;
        let store = MemoryStore::with_contents(json);
        let state = resume_or_new(&store, &dict(), &mut StdRng::seed_from_u64(3));
        assert!(state.guesses().is_empty());
    }
}
