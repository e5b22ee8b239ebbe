//! Saved-game record
//!
//! The on-disk shape is a single JSON object:
//!
//! ```json
//! {"answer": "slate", "guesses": ["crane"], "statuses": {"a": "correct"}, "isOver": false}
//! ```
//!
//! A snapshot is only trusted after replaying its guesses: anything that does
//! not describe a reachable game is rejected and the caller starts fresh.

use super::state::{GameState, MAX_GUESSES};
use crate::core::{KeyStatusMap, Word, WordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializable view of a game between guesses
///
/// The letters typed for the next guess are not part of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    pub answer: String,
    pub guesses: Vec<String>,
    pub statuses: KeyStatusMap,
    pub is_over: bool,
}

/// Reasons a decoded snapshot cannot be resumed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("bad answer: {0}")]
    Answer(#[source] WordError),

    #[error("bad guess #{index}: {source}")]
    Guess { index: usize, source: WordError },

    #[error("{0} guesses exceeds the limit of {limit}", limit = MAX_GUESSES)]
    TooManyGuesses(usize),

    #[error("guess #{0} comes after the game ended")]
    GuessAfterEnd(usize),

    #[error("stored key statuses do not match the guesses")]
    StatusMismatch,

    #[error("stored isOver={stored} but the guesses say {actual}")]
    OverMismatch { stored: bool, actual: bool },
}

impl GameState {
    /// Capture the persisted part of this game
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            answer: self.answer().text().to_string(),
            guesses: self
                .guesses()
                .iter()
                .map(|g| g.word.text().to_string())
                .collect(),
            statuses: self.keys().clone(),
            is_over: self.is_over(),
        }
    }

    /// Rebuild a game from a snapshot by replaying its guesses
    ///
    /// Guesses are not checked against the dictionary, so a save survives a
    /// change of word lists.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` when the snapshot does not describe a game that
    /// could have been played.
    pub fn restore(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        if snapshot.guesses.len() > MAX_GUESSES {
            return Err(SnapshotError::TooManyGuesses(snapshot.guesses.len()));
        }

        let answer = Word::new(snapshot.answer.as_str()).map_err(SnapshotError::Answer)?;
        let mut state = Self::with_answer(answer);

        for (index, text) in snapshot.guesses.iter().enumerate() {
            if state.is_over() {
                return Err(SnapshotError::GuessAfterEnd(index));
            }
            let word =
                Word::new(text.as_str()).map_err(|source| SnapshotError::Guess { index, source })?;
            state = state.record(word);
        }

        if *state.keys() != snapshot.statuses {
            return Err(SnapshotError::StatusMismatch);
        }
        if state.is_over() != snapshot.is_over {
            return Err(SnapshotError::OverMismatch {
                stored: snapshot.is_over,
                actual: state.is_over(),
            });
        }

        Ok(state)
    }
}
