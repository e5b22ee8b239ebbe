//! Wordle TUI
//!
//! Guess the hidden five-letter word in six tries, in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Feedback, LetterStatus, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &answer);
//! assert_eq!(feedback.to_emoji(), "🟨⬜🟨🟨⬜");
//! assert_eq!(feedback.count(LetterStatus::Present), 3);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Save slot
pub mod storage;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
