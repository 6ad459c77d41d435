//! Terminal rendering and event loop for horse.
//!
//! Handles setup/teardown of raw mode, alternate screen, redraws,
//! and events (keypress, resize) to app logic.

use crate::app::{AppState, KeypressResult, Outcome};
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until the session ends and returns its [Outcome].
/// The terminal is restored before returning, also when the loop failed.
///
/// The UI is drawn on stderr so stdout stays free for the single result line.
pub fn run_terminal(app: &mut AppState) -> io::Result<Outcome> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of horse: draws the UI, blocks on the next event and dispatches it to the app.
/// Returns on the first terminating keypress.
pub(crate) fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<Outcome>
where
    io::Error: From<<B as Backend>::Error>,
{
    let size = terminal.size()?;
    app.resize(size.height);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let KeypressResult::Exit(outcome) = app.handle_keypress(key) {
                    return Ok(outcome);
                }
            }
            Event::Resize(_, rows) => app.resize(rows),
            _ => {}
        }
    }
}
