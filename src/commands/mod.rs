//! Command implementations

pub mod simple;

pub use simple::{Command, play_line, run_session, run_simple, submit_line};
