//! TUI application state and logic

use super::rendering::{self, Target};
use crate::game::{Event, GameState, GameStatus};
use crate::storage::{Store, resume_or_new};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How often the loop wakes up to expire notices
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub state: GameState,
    pub dictionary: Dictionary,
    pub toast: Option<Toast>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Screen area of the last frame, for mouse hit-testing
    pub viewport: Rect,
    store: Box<dyn Store>,
    rng: StdRng,
    toast_duration: Duration,
}

/// What the input layer asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Event),
    Quit,
}

/// Transient one-line notice
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub style: MessageStyle,
    pub expires: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the games finished in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(dictionary: Dictionary, store: Box<dyn Store>, toast_duration: Duration) -> Self {
        Self::with_rng(dictionary, store, toast_duration, StdRng::from_os_rng())
    }

    /// Build the app with a caller-supplied RNG; resumes the saved game if any
    #[must_use]
    pub fn with_rng(
        dictionary: Dictionary,
        store: Box<dyn Store>,
        toast_duration: Duration,
        mut rng: StdRng,
    ) -> Self {
        let state = resume_or_new(store.as_ref(), &dictionary, &mut rng);
        store.save(&state.snapshot());

        let mut app = Self {
            state,
            dictionary,
            toast: None,
            stats: Statistics::default(),
            should_quit: false,
            viewport: Rect::default(),
            store,
            rng,
            toast_duration,
        };

        if !app.state.guesses().is_empty() && !app.state.is_over() {
            app.show_toast("Welcome back! Your game was restored.", MessageStyle::Info);
        }
        app
    }

    #[must_use]
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Run one game event to completion
    pub fn dispatch(&mut self, event: Event) {
        let was_over = self.state.is_over();
        let step = self
            .state
            .clone()
            .apply(event, &self.dictionary, &mut self.rng);
        self.state = step.state;

        if let Some(error) = step.rejected {
            self.show_toast(&error.to_string(), MessageStyle::Error);
        }

        if step.committed {
            self.store.save(&self.state.snapshot());
        }

        if event == Event::Reset {
            self.show_toast("New game started!", MessageStyle::Info);
        } else if !was_over && self.state.is_over() {
            self.finish_game();
        }
    }

    /// Apply an action from the input layer
    pub fn perform(&mut self, action: Action) {
        debug!(?action, "input");
        match action {
            Action::Game(event) => self.dispatch(event),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = key_action(&key, self.state.is_over()) {
            self.perform(action);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let action = match rendering::hit_test(self.viewport, mouse.column, mouse.row) {
            Some(Target::NewGame) => Action::Game(Event::Reset),
            Some(Target::Key(cap)) => Action::Game(cap.event()),
            None => return,
        };
        self.perform(action);
    }

    /// Drop the notice once its time is up
    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires) {
            self.toast = None;
        }
    }

    pub fn show_toast(&mut self, text: &str, style: MessageStyle) {
        self.toast = Some(Toast {
            text: text.to_string(),
            style,
            expires: Instant::now() + self.toast_duration,
        });
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;

        if self.state.status() == GameStatus::Won {
            let guess_count = self.state.guesses().len();
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 Genius! 🌟",
                2 => "🔥 Magnificent! 🔥",
                3 => "✨ Impressive! ✨",
                4 => "👏 Splendid! 👏",
                5 => "🎉 Great! 🎉",
                _ => "😅 Phew! 😅",
            };
            self.show_toast(celebration, MessageStyle::Success);
        }
    }
}

/// Map a key press to an action
///
/// Letters always go to the board; once the game is over, `n` starts a new
/// game and `q` quits.
#[must_use]
pub fn key_action(key: &KeyEvent, game_over: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::Game(Event::Reset)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n' | 'N') if game_over => Some(Action::Game(Event::Reset)),
        KeyCode::Char('q' | 'Q') if game_over => Some(Action::Quit),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Game(Event::Letter(c))),
        KeyCode::Backspace => Some(Action::Game(Event::Backspace)),
        KeyCode::Enter => Some(Action::Game(Event::Submit)),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let mut viewport = app.viewport;
        terminal.draw(|f| {
            viewport = f.area();
            rendering::ui(f, &app);
        })?;
        app.viewport = viewport;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                TermEvent::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
