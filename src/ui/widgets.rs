//! Header, footer and separator lines.

use crate::app::AppState;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// `[selected/total]` for the active list, `[0/0]` when it is empty.
fn counter_text(app: &AppState) -> String {
    let total = app.active_list().len();
    let selected = if total == 0 {
        0
    } else {
        app.cursor().selected() + 1
    };
    format!("[{selected}/{total}]")
}

/// Path, query and dimmed suggestion on the left, counter on the right.
pub(crate) fn draw_header(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let counter = counter_text(app);
    let counter_width = u16::try_from(counter.width()).unwrap_or(u16::MAX);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(counter_width)])
        .split(area);

    let mut spans = vec![
        Span::styled(shorten_home_path(app.dir().pwd()), theme.path_style()),
        Span::styled(app.search().query().to_string(), theme.entry_style()),
    ];
    if let Some(rest) = app.suggestion() {
        spans.push(Span::styled(rest.to_string(), theme.suggestion_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), cols[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(counter, theme.muted_style())),
        cols[1],
    );
}

pub(crate) fn draw_separator(frame: &mut Frame, area: Rect, style: Style) {
    frame.render_widget(
        Block::default().borders(Borders::TOP).border_style(style),
        area,
    );
}

/// The open prompt with the cursor after its input, else the latest status message.
pub(crate) fn draw_footer(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();

    if let Some(prompt) = app.prompt() {
        let line = Line::from(vec![
            Span::styled(prompt.label().to_string(), theme.path_style()),
            Span::styled(prompt.input().to_string(), theme.entry_style()),
        ]);
        let offset = prompt.label().width() + prompt.input().width();
        let x = area
            .x
            .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
            .min(area.right().saturating_sub(1));
        frame.render_widget(Paragraph::new(line), area);
        frame.set_cursor_position(Position::new(x, area.y));
        return;
    }

    if let Some(message) = app.message() {
        frame.render_widget(
            Paragraph::new(Span::styled(message.to_string(), theme.message_style())),
            area,
        );
    }
}
