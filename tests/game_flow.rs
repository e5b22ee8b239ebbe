use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::time::Duration;
use wordle_tui::config::GameConfig;
use wordle_tui::game::{Event, GameStatus, MAX_GUESSES};
use wordle_tui::interactive::App;
use wordle_tui::storage::{FileStore, MemoryStore, Store};
use wordle_tui::wordlists::{Dictionary, loader::words_from_slice};

const WRONG: [&str; MAX_GUESSES] = ["crane", "irate", "tales", "least", "react", "trace"];

fn dict() -> Dictionary {
    Dictionary::new(words_from_slice(&["slate"]), words_from_slice(&WRONG)).unwrap()
}

fn app(store: Box<dyn Store>) -> App {
    App::with_rng(dict(), store, Duration::from_secs(1), StdRng::seed_from_u64(7))
}

fn guess(app: &mut App, word: &str) {
    for c in word.chars() {
        app.dispatch(Event::Letter(c));
    }
    app.dispatch(Event::Submit);
}

#[test]
fn game_survives_restart_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/save.json");

    let mut first = app(Box::new(FileStore::new(&path)));
    guess(&mut first, "crane");
    guess(&mut first, "irate");
    first.dispatch(Event::Letter('s'));
    let played = first.state.clone();
    drop(first);

    let second = app(Box::new(FileStore::new(&path)));
    assert_eq!(second.state.guesses(), played.guesses());
    assert_eq!(second.state.keys(), played.keys());
    // typed letters are not saved
    assert_eq!(second.state.input(), "");
}

#[test]
fn finished_game_stays_finished_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut first = app(Box::new(FileStore::new(&path)));
    for word in WRONG {
        guess(&mut first, word);
    }
    assert_eq!(first.state.status(), GameStatus::Lost);
    drop(first);

    let mut second = app(Box::new(FileStore::new(&path)));
    assert_eq!(second.state.status(), GameStatus::Lost);

    guess(&mut second, "slate");
    assert_eq!(second.state.status(), GameStatus::Lost);
    assert_eq!(second.state.guesses().len(), MAX_GUESSES);

    second.dispatch(Event::Reset);
    assert_eq!(second.state.status(), GameStatus::Playing);
    assert!(second.state.keys().is_empty());
}

#[test]
fn corrupted_save_file_starts_fresh_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    fs::write(&path, "{ not json").unwrap();

    let app = app(Box::new(FileStore::new(&path)));
    assert!(app.state.guesses().is_empty());

    let saved = FileStore::new(&path).try_load().unwrap().unwrap();
    assert_eq!(saved, app.state.snapshot());
}

#[test]
fn tampered_statuses_are_rejected() {
    let store = MemoryStore::with_contents(
        r#"{"answer":"slate","guesses":["crane"],"statuses":{"c":"correct"},"isOver":false}"#,
    );
    let app = app(Box::new(store));
    assert!(app.state.guesses().is_empty());
}

#[test]
fn win_on_every_guess_count() {
    for wrong in 0..MAX_GUESSES {
        let mut app = app(Box::new(MemoryStore::new()));
        for word in &WRONG[..wrong] {
            guess(&mut app, word);
        }
        guess(&mut app, "SLATE");

        assert_eq!(app.state.status(), GameStatus::Won, "after {wrong} misses");
        assert_eq!(app.stats.guess_distribution[wrong + 1], 1);
    }
}

#[test]
fn no_save_config_never_touches_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig {
        save_file: Some(dir.path().join("save.json")),
        no_save: true,
        ..GameConfig::default()
    };

    let mut app = app(config.store());
    guess(&mut app, "crane");
    assert!(!dir.path().join("save.json").exists());
}
