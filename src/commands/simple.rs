//! Simple line-based mode
//!
//! Plays the same game as the TUI without taking over the terminal: one guess
//! per line, colored board printed after each accepted guess.

use crate::core::WORD_LENGTH;
use crate::error::WordleResult;
use crate::game::{Event, GameState, Step};
use crate::output::{print_board, print_result};
use crate::storage::{Store, resume_or_new};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    New,
    Quit,
    Help,
    Empty,
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            ":new" | ":n" => Self::New,
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":help" | ":h" | "?" => Self::Help,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Feed a whole typed line to the state machine as key events
///
/// Clears any leftover input first, then types the letters and submits.
pub fn submit_line<R: Rng>(
    state: GameState,
    line: &str,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Step {
    let clear = std::iter::repeat_n(Event::Backspace, state.input().len());
    let events = clear
        .chain(line.chars().map(Event::Letter))
        .chain([Event::Submit]);

    let mut step = Step {
        state,
        rejected: None,
        committed: false,
    };
    for event in events {
        let next = step.state.apply(event, dictionary, rng);
        step = Step {
            rejected: next.rejected.or(step.rejected),
            committed: next.committed || step.committed,
            state: next.state,
        };
    }
    step
}

/// Play one typed line and return the notice to show, if any
///
/// Input after the game has ended leaves the state untouched and yields no
/// notice.
pub fn play_line<R: Rng>(
    state: GameState,
    line: &str,
    dictionary: &Dictionary,
    rng: &mut R,
) -> (Step, Option<String>) {
    if state.is_over() {
        return (submit_line(state, line, dictionary, rng), None);
    }
    if line.chars().count() > WORD_LENGTH {
        let step = Step {
            state,
            rejected: None,
            committed: false,
        };
        return (step, Some("❌ Too many letters".to_string()));
    }

    let step = submit_line(state, line, dictionary, rng);
    let notice = step.rejected.map(|error| format!("❌ {error}"));
    (step, notice)
}

fn print_intro() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
}

fn print_help() {
    println!("Guess the hidden {WORD_LENGTH}-letter word. Type a guess and press Enter.");
    println!("Commands: ':new' for a new game, ':quit' to exit\n");
}

/// Run the simple interactive mode on stdin
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn run_simple(dictionary: &Dictionary, store: &dyn Store) -> WordleResult<()> {
    let stdin = io::stdin();
    run_session(stdin.lock(), dictionary, store, &mut rand::rng())?;
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Play from any line source until it ends or the player quits
///
/// Returns the state the session ended in.
///
/// # Errors
///
/// Returns an error if reading a line fails.
pub fn run_session<I, R>(
    input: I,
    dictionary: &Dictionary,
    store: &dyn Store,
    rng: &mut R,
) -> WordleResult<GameState>
where
    I: BufRead,
    R: Rng,
{
    let mut state = resume_or_new(store, dictionary, rng);
    store.save(&state.snapshot());

    print_intro();
    if !state.guesses().is_empty() {
        println!("Welcome back! Your game was restored.");
    }
    print_board(&state);
    print_result(&state);
    prompt(&state)?;

    for line in input.lines() {
        let line = line?;
        let command = Command::parse(&line);
        debug!(?command, "simple input");

        match command {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => print_help(),
            Command::New => {
                let step = state.apply(Event::Reset, dictionary, rng);
                state = step.state;
                store.save(&state.snapshot());
                println!("\n🔄 New game started!");
                print_board(&state);
            }
            Command::Guess(text) => {
                let (step, notice) = play_line(state, &text, dictionary, rng);
                state = step.state;

                if let Some(notice) = notice {
                    println!("{notice}");
                } else if step.committed {
                    store.save(&state.snapshot());
                    print_board(&state);
                    print_result(&state);
                }
            }
        }

        prompt(&state)?;
    }

    Ok(state)
}

fn prompt(state: &GameState) -> io::Result<()> {
    if state.is_over() {
        print!("Command: ");
    } else {
        print!(
            "Guess {}/{}: ",
            state.guesses().len() + 1,
            crate::game::MAX_GUESSES
        );
    }
    io::stdout().flush()
}
