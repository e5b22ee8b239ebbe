//! Interactive TUI mode
//!
//! Keyboard and mouse driven board built on ratatui and crossterm.

mod app;
pub mod rendering;

pub use app::{Action, App, MessageStyle, Statistics, Toast, key_action, run_tui};
