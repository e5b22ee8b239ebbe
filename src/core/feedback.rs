//! Guess feedback calculation and representation
//!
//! Each position of a guess gets one of three statuses:
//! - Absent (letter not in the answer, or every occurrence already matched)
//! - Present (letter in the answer, wrong position)
//! - Correct (letter in the correct position)

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-letter feedback classification
///
/// Ordered `Absent < Present < Correct` so that "better knowledge" compares
/// greater when merging key hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Evaluate `guess` against `answer`
    ///
    /// Duplicate letters are handled the way the real game does it: exact
    /// matches consume their answer letter first, then each remaining guess
    /// letter, left to right, consumes the first unconsumed occurrence in the
    /// answer. A letter can never be marked more often than it occurs.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.statuses(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact matches
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = LetterStatus::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: misplaced letters from what is left of the answer
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let found = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]);
            if let Some(j) = found {
                result[i] = LetterStatus::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜/⬛ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut chars = s.trim().chars();

        for slot in &mut statuses {
            *slot = LetterStatus::from_symbol(chars.next()?)?;
        }

        chars.next().is_none().then_some(Self(statuses))
    }

    /// Render as a row of emoji tiles
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
