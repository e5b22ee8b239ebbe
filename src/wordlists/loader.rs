//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_tui::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_tui::wordlists::loader::words_from_slice;
/// use wordle_tui::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}
