//! Theme configuration for horse.
//!
//! A handful of fg/bg pairs, parsed with [parse_color] into ratatui styles.

use crate::utils::parse_color;

use ratatui::style::{Modifier, Style};
use serde::Deserialize;

/// One foreground/background pair as written in horse.toml.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ColorPair {
    fg: String,
    bg: String,
}

impl ColorPair {
    fn new(fg: &str, bg: &str) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
        }
    }

    fn as_style(&self) -> Style {
        Style::default()
            .fg(parse_color(&self.fg))
            .bg(parse_color(&self.bg))
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new("default", "default")
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Theme {
    path: ColorPair,
    entry: ColorPair,
    directory: ColorPair,
    selection: ColorPair,
    muted: ColorPair,
    message: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            path: ColorPair::default(),
            entry: ColorPair::default(),
            directory: ColorPair::new("blue", "black"),
            selection: ColorPair::new("black", "white"),
            muted: ColorPair::new("gray", "default"),
            message: ColorPair::new("red", "default"),
        }
    }
}

impl Theme {
    pub(crate) fn path_style(&self) -> Style {
        self.path.as_style()
    }

    pub(crate) fn entry_style(&self) -> Style {
        self.entry.as_style()
    }

    pub(crate) fn directory_style(&self) -> Style {
        self.directory.as_style()
    }

    fn selection_style(&self) -> Style {
        self.selection.as_style()
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.muted.as_style()
    }

    /// Dimmed style for the autocomplete suggestion.
    pub(crate) fn suggestion_style(&self) -> Style {
        self.muted.as_style().add_modifier(Modifier::DIM)
    }

    pub(crate) fn message_style(&self) -> Style {
        self.message.as_style()
    }

    /// Style for a list row. A selected directory keeps its colours inverted.
    pub(crate) fn row_style(&self, is_dir: bool, is_selected: bool) -> Style {
        match (is_dir, is_selected) {
            (true, true) => self.directory_style().add_modifier(Modifier::REVERSED),
            (true, false) => self.directory_style(),
            (false, true) => self.selection_style(),
            (false, false) => self.entry_style(),
        }
    }
}
