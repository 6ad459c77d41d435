//! UI-related tests for horse
//!
//! These tests render [AppState] into ratatui's `TestBackend` and inspect the resulting buffer.
//! They create temporary directories which are cleaned up after the tests complete.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use horse::app::AppState;
use horse::config::{Config, RawConfig};
use horse::ui::{layout_chunks, render};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::error;
use std::fs;
use tempfile::tempdir;

fn no_preview_config() -> Result<Config, Box<dyn error::Error>> {
    let raw: RawConfig = toml::from_str("[general]\npreview = false\n")?;
    Ok(Config::from(raw))
}

fn draw(app: &mut AppState, width: u16, height: u16) -> Result<Vec<String>, Box<dyn error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    app.resize(height);
    terminal.draw(|f| render(f, app))?;

    let buffer = terminal.backend().buffer();
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect();
    Ok(rows)
}

#[test]
fn test_layout_chunks_with_and_without_preview() -> Result<(), Box<dyn error::Error>> {
    let area = Rect::new(0, 0, 100, 20);
    let temp = tempdir()?;

    let config = Config::default();
    let app = AppState::from_dir(&config, temp.path())?;
    let chunks = layout_chunks(area, &app);
    let preview = chunks.preview.ok_or("preview should be enabled by default")?;
    assert_eq!(chunks.list.width + preview.width, 100);
    assert_eq!(chunks.header.height, 1);
    assert_eq!(chunks.footer.y, 19);
    assert_eq!(chunks.list.height, 17);

    let config = no_preview_config()?;
    let app = AppState::from_dir(&config, temp.path())?;
    let chunks = layout_chunks(area, &app);
    assert!(chunks.preview.is_none());
    assert_eq!(chunks.list.width, 100);
    Ok(())
}

#[test]
fn test_render_empty_directory() -> Result<(), Box<dyn error::Error>> {
    let config = no_preview_config()?;
    let temp = tempdir()?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    let rows = draw(&mut app, 120, 8)?;
    assert!(rows[2].contains("*nothing here*"));
    assert!(rows[0].contains("[0/0]"));
    Ok(())
}

#[test]
fn test_render_list_marks_directories_and_counts() -> Result<(), Box<dyn error::Error>> {
    let config = no_preview_config()?;
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("folder"))?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    let rows = draw(&mut app, 120, 8)?;
    let marker = format!("folder{}", std::path::MAIN_SEPARATOR);
    assert!(rows[2].contains(&marker), "row was {:?}", rows[2]);
    assert!(rows[0].contains("[1/1]"));
    Ok(())
}

#[test]
fn test_render_scrolls_with_cursor() -> Result<(), Box<dyn error::Error>> {
    let config = no_preview_config()?;
    let temp = tempdir()?;
    for i in 0..10 {
        fs::write(temp.path().join(format!("entry_{i}")), "x")?;
    }
    let mut app = AppState::from_dir(&config, temp.path())?;
    app.resize(6);
    for _ in 0..9 {
        app.handle_keypress(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    }
    let selected = app
        .selected_entry()
        .map(|e| e.name_str().to_string())
        .ok_or("nothing selected")?;

    let rows = draw(&mut app, 120, 6)?;
    let list_rows = &rows[2..5];
    assert!(list_rows.iter().any(|r| r.contains(&selected)));
    assert!(rows[0].contains("[2/10]"));
    Ok(())
}

#[test]
fn test_render_query_suggestion_and_prompt() -> Result<(), Box<dyn error::Error>> {
    let config = no_preview_config()?;
    let temp = tempdir()?;
    fs::write(temp.path().join("readme.md"), "x")?;
    fs::write(temp.path().join("other"), "x")?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    app.handle_keypress(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
    app.handle_keypress(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
    let rows = draw(&mut app, 120, 8)?;
    assert!(rows[0].contains("readme.md"));
    assert!(rows[0].contains("[1/1]"));

    app.handle_keypress(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
    let rows = draw(&mut app, 120, 8)?;
    assert!(rows[7].contains("New path"));
    Ok(())
}

#[test]
fn test_render_preview_of_selected_file() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let temp = tempdir()?;
    fs::write(temp.path().join("hello.txt"), "first line\nsecond line\n")?;
    let mut app = AppState::from_dir(&config, temp.path())?;

    let rows = draw(&mut app, 80, 8)?;
    assert!(rows[2].contains("hello.txt"));
    assert!(rows[2].contains("first line"));
    assert!(rows[3].contains("second line"));
    Ok(())
}
