//! Best-known status per keyboard letter

use super::feedback::{Feedback, LetterStatus};
use super::word::Word;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Letter → best status observed across all submitted guesses
///
/// Only ever improves within a game: a letter shown `Correct` stays `Correct`
/// even if a later guess uses it in a position that scores lower.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyStatusMap(BTreeMap<char, LetterStatus>);

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-known status for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.0.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Fold one evaluated guess into the map
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, KeyStatusMap, LetterStatus, Word};
    ///
    /// let answer = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let keys = KeyStatusMap::new().merge(&guess, &Feedback::calculate(&guess, &answer));
    ///
    /// assert_eq!(keys.get('a'), Some(LetterStatus::Correct));
    /// assert_eq!(keys.get('c'), Some(LetterStatus::Absent));
    /// assert_eq!(keys.get('z'), None);
    /// ```
    #[must_use]
    pub fn merge(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut merged = self.0.clone();

        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            merged
                .entry(char::from(letter))
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }

        Self(merged)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.0.iter().map(|(&c, &s)| (c, s))
    }
}

impl FromIterator<(char, LetterStatus)> for KeyStatusMap {
    fn from_iter<I: IntoIterator<Item = (char, LetterStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn scored(guess: &str, answer: &str) -> (Word, Feedback) {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new(answer).unwrap());
        (guess, feedback)
    }

    #[test]
    fn merge_into_empty_map() {
        let (guess, feedback) = scored("crane", "slate");
        let keys = KeyStatusMap::new().merge(&guess, &feedback);

        assert_eq!(keys.len(), 5);
        assert_eq!(keys.get('c'), Some(Absent));
        assert_eq!(keys.get('a'), Some(Correct));
        assert_eq!(keys.get('E'), Some(Correct));
    }

    #[test]
    fn merge_never_downgrades() {
        let (first, first_fb) = scored("slate", "slate");
        let (second, second_fb) = scored("tales", "slate");

        let keys = KeyStatusMap::new().merge(&first, &first_fb);
        let keys = keys.merge(&second, &second_fb);

        for letter in ['s', 'l', 'a', 't', 'e'] {
            assert_eq!(keys.get(letter), Some(Correct), "{letter} regressed");
        }
    }

    #[test]
    fn merge_upgrades_present_to_correct() {
        let (first, first_fb) = scored("tales", "slate");
        let (second, second_fb) = scored("slant", "slate");

        let keys = KeyStatusMap::new().merge(&first, &first_fb);
        assert_eq!(keys.get('s'), Some(Present));

        let keys = keys.merge(&second, &second_fb);
        assert_eq!(keys.get('s'), Some(Correct));
        assert_eq!(keys.get('n'), Some(Absent));
    }

    #[test]
    fn merge_keeps_best_within_one_guess() {
        // 'e' scores Absent at index 0 and Correct at index 4
        let (guess, feedback) = scored("eerie", "abcde");
        let keys = KeyStatusMap::new().merge(&guess, &feedback);
        assert_eq!(keys.get('e'), Some(Correct));
    }

    #[test]
    fn merge_leaves_other_letters_alone() {
        let keys: KeyStatusMap = [('z', Present)].into_iter().collect();
        let (guess, feedback) = scored("crane", "slate");
        let merged = keys.merge(&guess, &feedback);

        assert_eq!(merged.get('z'), Some(Present));
        assert_eq!(keys.len(), 1, "merge must not touch the original map");
    }

    #[test]
    fn serializes_as_plain_object() {
        let keys: KeyStatusMap = [('a', Correct), ('b', Absent)].into_iter().collect();
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"{"a":"correct","b":"absent"}"#);

        let back: KeyStatusMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, keys);
    }
}
