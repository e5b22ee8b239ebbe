//! Terminal output formatting
//!
//! Colored board and keyboard rendering for the line-based mode.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_result};
