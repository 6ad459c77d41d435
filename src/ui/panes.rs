//! UI pane drawing module for horse.
//!
//! Draws the entry list and the preview pane.
//!
//! Used internally by ui::render

use crate::app::AppState;
use crate::core::{PreviewLine, read_preview};

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Shown in place of an empty list or directory.
const NOTHING_HERE: &str = "*nothing here*";

/// Draws the visible window of the active list, starting at the cursor's top row.
pub(crate) fn draw_list(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let active = app.active_list();

    if active.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(NOTHING_HERE, theme.muted_style())),
            area,
        );
        return;
    }

    let top = app.cursor().top();
    let selected = app.cursor().selected();
    let height = usize::from(area.height);

    let items: Vec<ListItem> = active
        .iter()
        .enumerate()
        .skip(top)
        .take(height)
        .map(|(idx, entry)| {
            let style = theme.row_style(entry.is_dir(), idx == selected);
            ListItem::new(Line::from(entry.display_name().into_owned())).style(style)
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

/// Draws the preview of the highlighted entry. Files are opened and closed within this call.
pub(crate) fn draw_preview(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme.muted_style());

    let Some(path) = app.selected_path() else {
        frame.render_widget(block, area);
        return;
    };

    let max_bytes = app.config().general().preview_max_bytes();
    let lines: Vec<Line> = read_preview(&path, usize::from(area.height), max_bytes)
        .into_iter()
        .map(|line| match line {
            PreviewLine::Text(text) => Line::styled(text, theme.entry_style()),
            PreviewLine::Dir(name) => Line::styled(name, theme.directory_style()),
            PreviewLine::Notice(notice) => Line::styled(notice, theme.muted_style()),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
