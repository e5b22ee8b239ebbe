//! Display functions for the line-based game

use super::formatters::{format_keyboard, format_row, share_grid};
use crate::game::{GameState, GameStatus, MAX_GUESSES};
use colored::Colorize;

/// Print the board followed by the keyboard summary
pub fn print_board(state: &GameState) {
    println!();
    for row in state.board() {
        println!("  {}", format_row(&row));
    }
    println!();
    for line in format_keyboard(state.keys()).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner and the share grid
pub fn print_result(state: &GameState) {
    let Some(grid) = share_grid(state) else {
        return;
    };

    println!("{}", "═".repeat(60).bright_cyan());
    match state.status() {
        GameStatus::Won => {
            let guesses = state.guesses().len();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {guesses}/{MAX_GUESSES} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                state.answer().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::Playing => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{grid}\n");
    println!("Type ':new' to play again or ':quit' to exit.");
}
