//! Core domain types for Wordle
//!
//! Pure, allocation-light types: words, per-letter feedback and the keyboard
//! hint map. Nothing here touches I/O or randomness.

mod feedback;
mod keys;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use keys::KeyStatusMap;
pub use word::{WORD_LENGTH, Word, WordError};
