//! Word lists and the game dictionary
//!
//! The answer and guess lists are compiled into the binary by `build.rs`.
//! `Dictionary` pairs the two: answers to draw from, plus a membership set
//! for validating guesses.

pub mod loader;

use crate::core::Word;
use crate::error::{WordleError, WordleResult};
use rand::Rng;
use rustc_hash::FxHashSet;

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Static answer list plus guess membership set
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary; every answer is also accepted as a guess.
    ///
    /// # Errors
    ///
    /// Returns `WordleError::EmptyAnswerList` if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed: impl IntoIterator<Item = Word>) -> WordleResult<Self> {
        if answers.is_empty() {
            return Err(WordleError::EmptyAnswerList);
        }

        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(answers.iter().cloned());

        Ok(Self { answers, allowed })
    }

    /// Dictionary backed by the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> WordleResult<Self> {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    /// Check whether `word` is a valid guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Uniformly pick an answer
    pub fn random_answer<R: Rng>(&self, rng: &mut R) -> Word {
        self.answers[rng.random_range(0..self.answers.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::new(
            loader::words_from_slice(&["crane", "slate"]),
            loader::words_from_slice(&["irate", "tales"]),
        )
        .unwrap()
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert!(ANSWERS_COUNT > 0);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_answers_are_guessable() {
        let dict = Dictionary::embedded().unwrap();
        assert_eq!(dict.answers().len(), ANSWERS_COUNT);
        for answer in dict.answers() {
            assert!(dict.contains(answer), "{answer} not guessable");
        }
    }

    #[test]
    fn everyday_words_are_guessable() {
        let dict = Dictionary::embedded().unwrap();
        assert!(dict.allowed_count() >= 4000);
        for word in ["adieu", "ghost", "pizza", "jumpy", "waltz", "stomp", "fjord", "nymph", "vivid", "quilt"] {
            assert!(dict.contains(&Word::new(word).unwrap()), "{word} rejected");
        }
    }

    #[test]
    fn answers_merged_into_allowed() {
        let dict = small();
        assert_eq!(dict.allowed_count(), 4);
        assert!(dict.contains(&Word::new("crane").unwrap()));
        assert!(dict.contains(&Word::new("TALES").unwrap()));
        assert!(!dict.contains(&Word::new("zzzzz").unwrap()));
    }

    #[test]
    fn empty_answer_list_rejected() {
        let result = Dictionary::new(Vec::new(), loader::words_from_slice(&["crane"]));
        assert!(matches!(result, Err(WordleError::EmptyAnswerList)));
    }

    #[test]
    fn random_answer_comes_from_answers() {
        let dict = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let answer = dict.random_answer(&mut rng);
            assert!(dict.answers().contains(&answer));
        }
    }
}
