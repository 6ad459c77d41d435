//! Session-level tests for horse
//!
//! These tests drive [AppState] with synthetic key events inside temporary directories
//! and check the directory, query, cursor and prompt state after each step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use horse::app::{AppState, CursorState, KeypressResult, Outcome, PathKind, ViewportConfig};
use horse::config::Config;
use rand::Rng;
use std::error;
use std::fs;
use tempfile::tempdir;

fn press(app: &mut AppState, code: KeyCode) -> KeypressResult {
    app.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(app: &mut AppState, c: char) -> KeypressResult {
    app.handle_keypress(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_str(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_cursor_movement_is_cyclic() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    let mut rng = rand::rng();
    let count = rng.random_range(1..=25);
    for i in 0..count {
        fs::write(temp.path().join(format!("file_{i:02}")), "x")?;
    }

    let mut app = AppState::from_dir(&config, temp.path())?;
    app.set_viewport(ViewportConfig::with_height(4));

    let start_moves = rng.random_range(0..count);
    for _ in 0..start_moves {
        press(&mut app, KeyCode::Down);
    }
    let start = app.cursor().selected();

    for _ in 0..count {
        press(&mut app, KeyCode::Down);
        let cursor = app.cursor();
        assert!(cursor.top() <= cursor.selected());
        assert!(cursor.selected() < cursor.top() + app.viewport().height());
    }
    assert_eq!(app.cursor().selected(), start);

    for _ in 0..count {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(app.cursor().selected(), start);
    Ok(())
}

#[test]
fn test_empty_directory_scenario() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    assert!(app.active_list().is_empty());
    assert_eq!(app.select(), None);
    assert_eq!(press(&mut app, KeyCode::Down), KeypressResult::Continue);
    assert_eq!(*app.cursor(), CursorState::default());
    assert_eq!(press(&mut app, KeyCode::Tab), KeypressResult::Continue);

    // typing finds nothing, so the keystroke is refused
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.search().query(), "");

    let pwd = app.dir().path().to_path_buf();
    assert_eq!(
        press(&mut app, KeyCode::Enter),
        KeypressResult::Exit(Outcome::EmitPath(pwd, PathKind::Cd))
    );
    Ok(())
}

#[test]
fn test_switch_dir_resets_session() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("alpha"))?;
    fs::create_dir(temp.path().join("beta"))?;
    fs::write(temp.path().join("alpha.txt"), "x")?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    type_str(&mut app, "al");
    press(&mut app, KeyCode::Down);
    ctrl(&mut app, 'a');
    assert!(app.prompt().is_some());

    let target = app.dir().path().join("beta");
    app.switch_dir(&target)?;

    assert_eq!(app.dir().path(), target);
    assert_eq!(app.search().query(), "");
    assert!(app.search().results().is_empty());
    assert_eq!(*app.cursor(), CursorState::default());
    assert!(app.prompt().is_none());
    Ok(())
}

#[test]
fn test_refresh_is_idempotent_and_picks_up_changes() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::write(temp.path().join("one"), "x")?;
    let mut app = AppState::from_dir(&config, temp.path())?;
    let path = app.dir().path().to_path_buf();

    fs::write(temp.path().join("two"), "x")?;
    let same = path.clone();
    app.switch_dir(&same)?;
    assert_eq!(app.dir().path(), path);
    assert_eq!(app.dir().entries().len(), 2);

    fs::remove_file(temp.path().join("one"))?;
    app.refresh()?;
    assert_eq!(app.dir().path(), path);
    assert_eq!(app.dir().entries().len(), 1);
    assert_eq!(app.dir().entries()[0].name_str(), "two");
    Ok(())
}

#[test]
fn test_backspace_goes_up_one_directory() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested)?;

    let mut app = AppState::from_dir(&config, &nested)?;
    let a = app.dir().path().parent().map(|p| p.to_path_buf()).ok_or("no parent")?;

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.dir().path(), a);
    assert_eq!(app.dir().pwd(), horse::utils::dir_display(&a));
    Ok(())
}

#[test]
fn test_backspace_shortens_query_before_going_up() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::write(temp.path().join("notes"), "x")?;
    let mut app = AppState::from_dir(&config, temp.path())?;
    let path = app.dir().path().to_path_buf();

    type_str(&mut app, "no");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.search().query(), "n");
    assert_eq!(app.dir().path(), path);

    ctrl(&mut app, 'b');
    assert_eq!(app.search().query(), "");
    assert_eq!(app.dir().path(), path);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_backspace_stops_at_single_segment() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let mut app = AppState::from_dir(&config, std::path::Path::new("/tmp"))?;
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.dir().pwd(), "/tmp/");

    let mut app = AppState::from_dir(&config, std::path::Path::new("/"))?;
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.dir().pwd(), "/");
    Ok(())
}

#[test]
fn test_create_directory_switches_into_it() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    let mut app = AppState::from_dir(&config, temp.path())?;
    let base = app.dir().path().to_path_buf();

    ctrl(&mut app, 'a');
    type_str(&mut app, "newdir/");
    assert_eq!(press(&mut app, KeyCode::Enter), KeypressResult::Continue);

    assert!(temp.path().join("newdir").is_dir());
    assert_eq!(app.dir().path(), base.join("newdir"));
    assert!(app.dir().entries().is_empty());
    assert!(app.prompt().is_none());
    Ok(())
}

#[test]
fn test_create_file_shows_containing_directory() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    let mut app = AppState::from_dir(&config, temp.path())?;
    let base = app.dir().path().to_path_buf();

    ctrl(&mut app, 'a');
    type_str(&mut app, "deep/er/file.txt");
    press(&mut app, KeyCode::Enter);

    assert!(temp.path().join("deep/er/file.txt").is_file());
    assert_eq!(app.dir().path(), base.join("deep").join("er"));
    assert_eq!(app.dir().entries().len(), 1);
    Ok(())
}

#[test]
fn test_prompt_owns_all_input() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("sub"))?;
    fs::write(temp.path().join("file"), "x")?;
    let mut app = AppState::from_dir(&config, temp.path())?;
    let path = app.dir().path().to_path_buf();

    ctrl(&mut app, 'a');
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    type_str(&mut app, "su");
    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.dir().path(), path);
    assert_eq!(app.cursor().selected(), 0);
    assert_eq!(app.search().query(), "");
    assert_eq!(app.prompt().map(|p| p.input()), Some("s"));

    // cancel discards the input without touching the filesystem
    assert_eq!(press(&mut app, KeyCode::Esc), KeypressResult::Continue);
    assert!(app.prompt().is_none());
    assert_eq!(app.dir().entries().len(), 2);
    Ok(())
}

#[test]
fn test_delete_directory_recursively() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::create_dir_all(temp.path().join("doomed").join("inner"))?;
    fs::write(temp.path().join("doomed").join("inner").join("f"), "x")?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    ctrl(&mut app, 'd');
    let label = app.prompt().map(|p| p.label().to_string()).unwrap_or_default();
    assert!(label.contains("doomed"));
    press(&mut app, KeyCode::Char('y'));
    press(&mut app, KeyCode::Enter);

    assert!(!temp.path().join("doomed").exists());
    assert!(app.dir().entries().is_empty());
    Ok(())
}

#[test]
fn test_home_toggles_to_root() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let Some(home) = dirs::home_dir() else {
        return Ok(());
    };
    if !home.is_dir() {
        return Ok(());
    }
    let temp = tempdir()?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    ctrl(&mut app, 'e');
    assert_eq!(app.dir().path(), horse::utils::clean_path(&home));

    ctrl(&mut app, 'e');
    assert_eq!(app.dir().path(), horse::utils::root_of(&home));
    Ok(())
}
