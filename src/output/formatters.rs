//! Formatting utilities for terminal output

use crate::core::{KeyStatusMap, LetterStatus};
use crate::game::{Cell, GameState, GameStatus, MAX_GUESSES};
use colored::{ColoredString, Colorize};

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// One board cell as a 3-column colored tile
#[must_use]
pub fn tile(cell: Cell) -> ColoredString {
    match cell {
        Cell::Empty => " · ".bright_black(),
        Cell::Pending(c) => format!(" {} ", c.to_ascii_uppercase()).black().on_white(),
        Cell::Scored(c, status) => status_colored(&format!(" {} ", c.to_ascii_uppercase()), status),
    }
}

fn status_colored(text: &str, status: LetterStatus) -> ColoredString {
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A board row as a single line of tiles
#[must_use]
pub fn format_row(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| tile(*cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The QWERTY keyboard with every letter colored by its best known status
///
/// Letters not guessed yet are left plain.
#[must_use]
pub fn format_keyboard(keys: &KeyStatusMap) -> String {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let letters: Vec<String> = row
                .chars()
                .map(|c| {
                    let label = c.to_ascii_uppercase().to_string();
                    match keys.get(c) {
                        Some(status) => status_colored(&label, status).to_string(),
                        None => label,
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(indent), letters.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spoiler-free result grid, e.g. `Wordle 3/6` followed by emoji rows
///
/// Returns `None` while the game is still being played.
#[must_use]
pub fn share_grid(state: &GameState) -> Option<String> {
    let score = match state.status() {
        GameStatus::Playing => return None,
        GameStatus::Won => state.guesses().len().to_string(),
        GameStatus::Lost => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{MAX_GUESSES}\n");
    for guess in state.guesses() {
        grid.push('\n');
        grid.push_str(&guess.feedback.to_emoji());
    }
    Some(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use crate::game::Event;
    use crate::wordlists::{Dictionary, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(answer: &str, words: &[&str]) -> GameState {
        let dict = Dictionary::new(
            words_from_slice(&[answer]),
            words_from_slice(&["crane", "irate", "tales", "least", "react", "trace"]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let mut state = GameState::with_answer(Word::new(answer).unwrap());
        for word in words {
            for event in word.chars().map(Event::Letter).chain([Event::Submit]) {
                state = state.apply(event, &dict, &mut rng).state;
            }
        }
        state
    }

    #[test]
    fn share_grid_for_win() {
        let state = play("slate", &["crane", "slate"]);
        assert_eq!(
            share_grid(&state).unwrap(),
            "Wordle 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_for_loss_uses_x() {
        let state = play("slate", &["crane", "irate", "tales", "least", "react", "trace"]);
        let grid = share_grid(&state).unwrap();
        assert!(grid.starts_with("Wordle X/6\n"));
        assert_eq!(grid.lines().count(), 2 + MAX_GUESSES);
    }

    #[test]
    fn no_share_grid_mid_game() {
        let state = play("slate", &["crane"]);
        assert!(share_grid(&state).is_none());
    }

    #[test]
    fn row_shows_uppercase_letters() {
        let row = [
            Cell::Scored('c', LetterStatus::Absent),
            Cell::Scored('r', LetterStatus::Present),
            Cell::Pending('a'),
            Cell::Empty,
            Cell::Empty,
        ];
        let line = format_row(&row);
        assert!(line.contains('C'));
        assert!(line.contains('R'));
        assert!(line.contains('A'));
        assert!(line.contains('·'));
    }

    #[test]
    fn keyboard_lists_every_letter_once() {
        let keys = KeyStatusMap::new().merge(
            &Word::new("crane").unwrap(),
            &Feedback::parse("-Y-G-").unwrap(),
        );
        let keyboard = format_keyboard(&keys);
        assert_eq!(keyboard.lines().count(), 3);
        for c in 'A'..='Z' {
            assert!(keyboard.contains(c), "{c}");
        }
    }
}
