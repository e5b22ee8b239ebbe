//! TUI rendering with ratatui
//!
//! Layout is computed by plain functions so the mouse handler can hit-test
//! exactly the rectangles that were drawn.

use super::app::{App, MessageStyle};
use crate::core::LetterStatus;
use crate::game::{Cell, Event, GameStatus, MAX_GUESSES};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_GAP: u16 = 1;
const NEW_GAME_LABEL: &str = "[ New Game ]";

/// An on-screen keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(char),
    Enter,
    Backspace,
}

impl KeyCap {
    /// The game event this key produces
    #[must_use]
    pub const fn event(self) -> Event {
        match self {
            Self::Letter(c) => Event::Letter(c),
            Self::Enter => Event::Submit,
            Self::Backspace => Event::Backspace,
        }
    }

    fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => KEY_WIDTH,
            Self::Enter | Self::Backspace => WIDE_KEY_WIDTH,
        }
    }
}

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Key(KeyCap),
    NewGame,
}

/// Screen areas of one frame
#[derive(Debug, Clone, Copy)]
pub struct Regions {
    pub header: Rect,
    pub board: Rect,
    pub notice: Rect,
    pub reveal: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the screen into its fixed regions
#[must_use]
pub fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(11),    // Board: 6 rows with a blank line between
            Constraint::Length(1),  // Notice
            Constraint::Length(1),  // Answer reveal
            Constraint::Length(5),  // Keyboard: 3 rows with a blank line between
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    Regions {
        header: chunks[0],
        board: chunks[1],
        notice: chunks[2],
        reveal: chunks[3],
        keyboard: chunks[4],
        status: chunks[5],
    }
}

/// The clickable new-game button, inside the header's right border
#[must_use]
pub fn new_game_button(header: Rect) -> Rect {
    let width = NEW_GAME_LABEL.chars().count() as u16;
    let x = header.right().saturating_sub(width + 2).max(header.x);
    Rect::new(x, header.y + 1, width, 1).intersection(header)
}

/// Positions of every keyboard key, centered row by row
#[must_use]
pub fn keyboard_keys(area: Rect) -> Vec<(KeyCap, Rect)> {
    let mut keys = Vec::with_capacity(28);

    for (row_index, row) in KEY_ROWS.iter().enumerate() {
        let mut caps: Vec<KeyCap> = row.chars().map(KeyCap::Letter).collect();
        if row_index == KEY_ROWS.len() - 1 {
            caps.insert(0, KeyCap::Enter);
            caps.push(KeyCap::Backspace);
        }

        let row_width: u16 =
            caps.iter().map(|cap| cap.width()).sum::<u16>() + KEY_GAP * (caps.len() as u16 - 1);
        let y = area.y + row_index as u16 * 2;
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for cap in caps {
            let rect = Rect::new(x, y, cap.width(), 1).intersection(area);
            if !rect.is_empty() {
                keys.push((cap, rect));
            }
            x = x.saturating_add(cap.width() + KEY_GAP);
        }
    }

    keys
}

/// Find what, if anything, is under a screen position
#[must_use]
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Target> {
    let regions = regions(area);
    let position = Position::new(column, row);

    if new_game_button(regions.header).contains(position) {
        return Some(Target::NewGame);
    }

    keyboard_keys(regions.keyboard)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(cap, _)| Target::Key(cap))
}

fn status_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::Black).bg(Color::Gray),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let regions = regions(f.area());

    render_header(f, regions.header);
    render_board(f, app, regions.board);
    render_notice(f, app, regions.notice);
    render_reveal(f, app, regions.reveal);
    render_keyboard(f, app, regions.keyboard);
    render_status(f, app, regions.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);

    let button = Paragraph::new(NEW_GAME_LABEL).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(button, new_game_button(area));
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.state.board();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for (i, row) in board.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let mut spans = Vec::with_capacity(row.len() * 2);
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(match *cell {
                Cell::Empty => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Cell::Pending(c) => Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Scored(c, status) => Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    status_style(Some(status)),
                ),
            });
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let Some(toast) = &app.toast else {
        return;
    };

    let style = match toast.style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    let notice = Paragraph::new(toast.text.as_str())
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(notice, area);
}

fn render_reveal(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.state.status() {
        GameStatus::Playing => return,
        GameStatus::Won => (
            format!(
                "Solved in {}/{MAX_GUESSES}! Press N or click {NEW_GAME_LABEL} to play again",
                app.state.guesses().len()
            ),
            Color::Green,
        ),
        GameStatus::Lost => (
            format!(
                "The word was {}. Press N or click {NEW_GAME_LABEL} to play again",
                app.state.answer().text().to_uppercase()
            ),
            Color::Red,
        ),
    };

    let reveal = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(reveal, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (cap, rect) in keyboard_keys(area) {
        let style = match cap {
            KeyCap::Letter(c) => status_style(app.state.keys().get(c)),
            KeyCap::Enter | KeyCap::Backspace => status_style(None),
        };
        let key = Paragraph::new(cap.label())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(key, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ])
        .split(area);

    let turn_text = format!(
        "Guess {}/{MAX_GUESSES}",
        (app.state.guesses().len() + 1).min(MAX_GUESSES)
    );
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.state.is_over() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Ctrl+N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
