//! Application state and main controller module for horse.
//!
//! This module defines the [AppState] struct, which exclusively owns the session model:
//! - the [DirectoryState] of the working directory
//! - the [SearchState] of the type-ahead query
//! - the [CursorState] over the list in view, sized by a [ViewportConfig]
//! - an optional [Prompt] which, while open, receives every keypress
//!
//! Input is fed in through [AppState::handle_keypress], which returns a [KeypressResult].
//! A terminating keypress carries an [Outcome] describing how the process should end.
//! The renderer only ever reads the state through the accessors below.

use crate::app::keymap::Keymap;
use crate::app::{CursorState, DirectoryState, Prompt, SearchState, ViewportConfig};
use crate::config::Config;
use crate::core::{FileEntry, Opener};
use crate::error::Result;
use crate::utils::dir_display;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};

/// What an emitted path is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A directory to `cd` into.
    Cd,
    /// A file to open in `$EDITOR`.
    Edit,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Leave without output.
    Exit(i32),
    /// Print a single shell line for `path` and exit successfully.
    EmitPath(PathBuf, PathKind),
    /// Opening externally is impossible here, print the message and exit.
    Unsupported(String),
}

impl Outcome {
    /// The single line printed on stdout, if any.
    pub fn shell_line(&self) -> Option<String> {
        match self {
            Outcome::EmitPath(path, PathKind::Cd) => Some(format!("cd {}", dir_display(path))),
            Outcome::EmitPath(path, PathKind::Edit) => {
                Some(format!("$EDITOR {}", path.display()))
            }
            _ => None,
        }
    }

    pub fn emitted_path(&self) -> Option<&Path> {
        match self {
            Outcome::EmitPath(path, _) => Some(path),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Exit(code) => *code,
            _ => 0,
        }
    }
}

/// Enumeration for each individual keypress result processed.
#[derive(Debug, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Exit(Outcome),
}

/// The list currently in view: the filtered results if a filter is active, else the full listing.
#[derive(Clone, Copy)]
pub struct ActiveList<'s> {
    entries: &'s [FileEntry],
    results: Option<&'s [usize]>,
}

impl<'s> ActiveList<'s> {
    pub fn len(&self) -> usize {
        match self.results {
            Some(results) => results.len(),
            None => self.entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get(&self, pos: usize) -> Option<&'s FileEntry> {
        match self.results {
            Some(results) => results.get(pos).and_then(|&idx| self.entries.get(idx)),
            None => self.entries.get(pos),
        }
    }

    pub fn iter(self) -> impl Iterator<Item = &'s FileEntry> {
        (0..self.len()).filter_map(move |pos| self.get(pos))
    }
}

/// Main struct which holds the central application state of horse
///
/// Holds a reference to the configuration, the keymap built from it, the session model
/// and the lazily spawned opener worker.
pub struct AppState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,
    pub(super) viewport: ViewportConfig,

    pub(super) dir: DirectoryState,
    pub(super) search: SearchState,
    pub(super) cursor: CursorState,
    pub(super) prompt: Option<Prompt>,

    pub(super) opener: Option<Opener>,
    pub(super) message: Option<String>,
}

impl<'a> AppState<'a> {
    pub fn from_dir(config: &'a Config, initial_path: &Path) -> Result<Self> {
        let dir = DirectoryState::read(initial_path)?;
        Ok(Self {
            config,
            keymap: Keymap::from_config(config),
            viewport: ViewportConfig::default(),
            dir,
            search: SearchState::default(),
            cursor: CursorState::default(),
            prompt: None,
            opener: None,
            message: None,
        })
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn dir(&self) -> &DirectoryState {
        &self.dir
    }

    #[inline]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    #[inline]
    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    #[inline]
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    #[inline]
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // Entry functions

    pub fn active_list(&self) -> ActiveList<'_> {
        ActiveList {
            entries: self.dir.entries(),
            results: self
                .search
                .is_filtering()
                .then(|| self.search.results()),
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.active_list().get(self.cursor.selected())
    }

    pub(crate) fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry()
            .map(|entry| self.dir.entry_path(entry))
    }

    /// Remainder of the top result when it extends the query, shown dimmed after it.
    pub(crate) fn suggestion(&self) -> Option<&str> {
        let query = self.search.query();
        if query.is_empty() || !self.search.is_filtering() {
            return None;
        }
        let top = self.active_list().get(0)?.name_str();
        top.strip_prefix(query).filter(|rest| !rest.is_empty())
    }

    /// Applies a new terminal height.
    pub fn resize(&mut self, rows: u16) {
        self.viewport = ViewportConfig::from_terminal_rows(rows);
        let len = self.active_list().len();
        self.cursor.clamp(len, &self.viewport);
    }

    pub fn set_viewport(&mut self, viewport: ViewportConfig) {
        self.viewport = viewport;
        let len = self.active_list().len();
        self.cursor.clamp(len, &self.viewport);
    }

    // Directory functions

    /// Reads `target` and, only if that succeeded, replaces the directory state and
    /// resets the query, the cursor and any open prompt.
    ///
    /// On failure the previous directory stays in place and the reason is shown as a message.
    pub fn switch_dir(&mut self, target: &Path) -> Result<()> {
        match DirectoryState::read(target) {
            Ok(dir) => {
                self.dir = dir;
                self.search.reset();
                self.cursor.reset();
                self.prompt = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(target = %target.display(), error = %e, "directory switch refused");
                self.message = Some(e.status_text());
                Err(e)
            }
        }
    }

    /// Re-reads the working directory.
    pub fn refresh(&mut self) -> Result<()> {
        let current = self.dir.path().to_path_buf();
        self.switch_dir(&current)
    }

    /// Enters the selected directory, or returns the path of the selected file.
    ///
    /// `None` means nothing terminal happened: the list was empty, a directory was entered,
    /// or entering it failed.
    pub fn select(&mut self) -> Option<PathBuf> {
        let entry = self.selected_entry()?;
        let is_dir = entry.is_dir();
        let path = self.dir.entry_path(entry);

        if is_dir {
            let _ = self.switch_dir(&path);
            None
        } else {
            Some(path)
        }
    }

    /// Processes a single keypress.
    ///
    /// An open prompt consumes every key. Otherwise bound keys trigger their [Action] and
    /// unmodified characters extend the query.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        self.message = None;

        if self.prompt.is_some() {
            return self.handle_prompt_key(key);
        }

        if let Some(action) = self.keymap.lookup(key) {
            return self.handle_action(action);
        }

        if let KeyCode::Char(c) = key.code
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            self.handle_query_char(c);
        }

        KeypressResult::Continue
    }
}
