//! Game session state and its transitions
//!
//! `GameState` is a plain value. Every input is applied with
//! [`GameState::apply`], which consumes the old state and returns the next one
//! wrapped in a [`Step`]; nothing else mutates a session.

use crate::core::{Feedback, KeyStatusMap, LetterStatus, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// Attempts per game
pub const MAX_GUESSES: usize = 6;

/// A submitted word and how it scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A single input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Letter(char),
    Backspace,
    Submit,
    Reset,
}

/// Why a submit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Not in word list")]
    NotInWordList,
}

/// Result of applying one event
#[derive(Debug, Clone)]
pub struct Step {
    pub state: GameState,
    /// Set when a submit was refused; the state is unchanged
    pub rejected: Option<GuessError>,
    /// True when the persisted part of the state changed (guess accepted or reset)
    pub committed: bool,
}

impl Step {
    fn unchanged(state: GameState) -> Self {
        Self {
            state,
            rejected: None,
            committed: false,
        }
    }

    fn committed(state: GameState) -> Self {
        Self {
            state,
            rejected: None,
            committed: true,
        }
    }

    fn rejected(state: GameState, error: GuessError) -> Self {
        Self {
            state,
            rejected: Some(error),
            committed: false,
        }
    }
}

/// What a board cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Typed but not yet submitted
    Pending(char),
    Scored(char, LetterStatus),
}

/// One game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    answer: Word,
    guesses: Vec<Guess>,
    input: String,
    keys: KeyStatusMap,
    status: GameStatus,
}

impl GameState {
    /// Start a game with a random answer
    pub fn new<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> Self {
        let state = Self::with_answer(dictionary.random_answer(rng));
        info!("new game started");
        debug!(answer = %state.answer, "answer drawn");
        state
    }

    /// Start a game with a known answer
    #[must_use]
    pub fn with_answer(answer: Word) -> Self {
        Self {
            answer,
            guesses: Vec::with_capacity(MAX_GUESSES),
            input: String::with_capacity(WORD_LENGTH),
            keys: KeyStatusMap::new(),
            status: GameStatus::Playing,
        }
    }

    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn keys(&self) -> &KeyStatusMap {
        &self.keys
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// Apply one input event
    ///
    /// Letters, backspace and submit are ignored once the game is over; reset
    /// is always honored.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Word;
    /// use wordle_tui::game::{Event, GameState, GameStatus};
    /// use wordle_tui::wordlists::{Dictionary, loader::words_from_slice};
    ///
    /// let dict = Dictionary::new(words_from_slice(&["crane"]), []).unwrap();
    /// let mut rng = rand::rng();
    /// let mut state = GameState::with_answer(Word::new("crane").unwrap());
    ///
    /// for event in "crane".chars().map(Event::Letter).chain([Event::Submit]) {
    ///     state = state.apply(event, &dict, &mut rng).state;
    /// }
    /// assert_eq!(state.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn apply<R: Rng>(self, event: Event, dictionary: &Dictionary, rng: &mut R) -> Step {
        match event {
            Event::Reset => Step::committed(Self::new(dictionary, rng)),
            _ if self.is_over() => Step::unchanged(self),
            Event::Letter(c) => Step::unchanged(self.push_letter(c)),
            Event::Backspace => Step::unchanged(self.pop_letter()),
            Event::Submit => self.submit(dictionary),
        }
    }

    fn push_letter(mut self, c: char) -> Self {
        if c.is_ascii_alphabetic() && self.input.len() < WORD_LENGTH {
            self.input.push(c.to_ascii_lowercase());
        }
        self
    }

    fn pop_letter(mut self) -> Self {
        self.input.pop();
        self
    }

    fn submit(self, dictionary: &Dictionary) -> Step {
        if self.input.len() != WORD_LENGTH {
            return Step::rejected(self, GuessError::NotEnoughLetters);
        }

        let word = match Word::new(self.input.as_str()) {
            Ok(word) if dictionary.contains(&word) => word,
            _ => {
                debug!(input = %self.input, "guess not in word list");
                return Step::rejected(self, GuessError::NotInWordList);
            }
        };

        Step::committed(self.record(word))
    }

    /// Score `word`, append it and settle the game status
    ///
    /// Does not check the dictionary; callers validate first.
    pub(super) fn record(mut self, word: Word) -> Self {
        let feedback = Feedback::calculate(&word, &self.answer);
        self.keys = self.keys.merge(&word, &feedback);
        self.input.clear();
        debug!(guess = %word, feedback = %feedback, "guess recorded");
        self.guesses.push(Guess { word, feedback });

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
            info!(guesses = self.guesses.len(), "game won");
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
            info!(answer = %self.answer, "game lost");
        }

        self
    }

    /// The 6×5 grid as the player sees it
    #[must_use]
    pub fn board(&self) -> [[Cell; WORD_LENGTH]; MAX_GUESSES] {
        let mut board = [[Cell::Empty; WORD_LENGTH]; MAX_GUESSES];

        for (row, guess) in board.iter_mut().zip(&self.guesses) {
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = Cell::Scored(char::from(guess.word.char_at(i)), guess.feedback.at(i));
            }
        }

        if let Some(row) = board.get_mut(self.guesses.len()) {
            for (cell, c) in row.iter_mut().zip(self.input.chars()) {
                *cell = Cell::Pending(c);
            }
        }

        board
    }
}
