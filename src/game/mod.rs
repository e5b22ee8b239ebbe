//! The game session: state machine and saved-game snapshots

mod snapshot;
mod state;

pub use snapshot::{Snapshot, SnapshotError};
pub use state::{Cell, Event, GameState, GameStatus, Guess, GuessError, MAX_GUESSES, Step};
