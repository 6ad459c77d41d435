//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into header, list, preview and footer chunks.
//!
//! This module should stay "pure rendering": it reads state + config and
//! produces widgets, without owning session logic.

use crate::app::AppState;
use crate::ui::{panes, widgets};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChunks {
    pub header: Rect,
    pub separator: Rect,
    pub list: Rect,
    pub preview: Option<Rect>,
    pub footer: Rect,
}

/// Splits `area` into the rows reserved for header, separator and footer,
/// with the body in between. The body is halved when the preview is enabled.
pub fn layout_chunks(area: Rect, app: &AppState) -> ScreenChunks {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let (list, preview) = if app.config().general().preview() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        (cols[0], Some(cols[1]))
    } else {
        (rows[2], None)
    };

    ScreenChunks {
        header: rows[0],
        separator: rows[1],
        list,
        preview,
        footer: rows[3],
    }
}

/// Render function which renders the entire terminal UI for horse on each frame.
pub fn render(frame: &mut Frame, app: &AppState) {
    let chunks = layout_chunks(frame.area(), app);

    widgets::draw_header(frame, chunks.header, app);
    widgets::draw_separator(frame, chunks.separator, app.config().theme().muted_style());
    panes::draw_list(frame, chunks.list, app);
    if let Some(area) = chunks.preview {
        panes::draw_preview(frame, area, app);
    }
    widgets::draw_footer(frame, chunks.footer, app);
}
