//! Input action handler methods for horse.
//!
//! This module implements [AppState] methods that process bound actions,
//! query typing and the create/delete prompts.

use crate::app::keymap::Action;
use crate::app::prompt::{Prompt, PromptKind};
use crate::app::state::{AppState, KeypressResult, Outcome, PathKind};
use crate::core::{OpenCommand, Opener, create_path, remove_path};
use crate::utils::{clean_path, get_home, root_of};

use crossterm::event::{KeyCode::*, KeyEvent, KeyModifiers};

/// AppState input and action handlers
impl<'a> AppState<'a> {
    /// Handles keys while a prompt is open. Every key is consumed.
    pub(super) fn handle_prompt_key(&mut self, key: KeyEvent) -> KeypressResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            Enter => self.submit_prompt(),
            Esc => self.cancel_prompt(),
            Char('c') if ctrl => self.cancel_prompt(),
            Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.backspace();
                }
            }
            Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.push(c);
                }
            }
            _ => {}
        }
        KeypressResult::Continue
    }

    /// Dispatches a bound action.
    pub(super) fn handle_action(&mut self, action: Action) -> KeypressResult {
        match action {
            Action::Quit => return KeypressResult::Exit(Outcome::Exit(1)),
            Action::Select => {
                if let Some(path) = self.select() {
                    return KeypressResult::Exit(Outcome::EmitPath(path, PathKind::Edit));
                }
            }
            Action::EmitPwd => return KeypressResult::Exit(self.emit_pwd()),
            Action::GoUp => {
                let len = self.active_list().len();
                self.cursor.move_up(len, &self.viewport);
            }
            Action::GoDown => {
                let len = self.active_list().len();
                self.cursor.move_down(len, &self.viewport);
            }
            Action::Backspace => self.query_backspace(false),
            Action::DeleteWord => self.query_backspace(true),
            Action::Home => self.toggle_home(),
            Action::OpenExternal => return self.open_external(),
            Action::Create => self.open_create_prompt(),
            Action::Delete => self.open_delete_prompt(),
        }
        KeypressResult::Continue
    }

    /// Appends a typed character to the query. Refused keystrokes leave everything as it was.
    pub(super) fn handle_query_char(&mut self, c: char) {
        let max_len = self.config.general().max_query_len();
        if self.search.try_extend(c, self.dir.entries(), max_len) {
            self.cursor.reset();
        }
    }

    // Navigation handlers

    /// Picks what Enter emits: the highlighted filtered entry, else the working directory.
    fn emit_pwd(&self) -> Outcome {
        if self.search.is_filtering()
            && let Some(entry) = self.selected_entry()
        {
            let kind = if entry.is_dir() {
                PathKind::Cd
            } else {
                PathKind::Edit
            };
            return Outcome::EmitPath(self.dir.entry_path(entry), kind);
        }
        Outcome::EmitPath(self.dir.path().to_path_buf(), PathKind::Cd)
    }

    /// Shortens the query, or goes up one directory when it is already empty.
    fn query_backspace(&mut self, full_word: bool) {
        if self.search.query().is_empty() {
            if let Some(parent) = self.dir.parent() {
                let _ = self.switch_dir(&parent);
            }
            return;
        }

        self.search.shorten(full_word, self.dir.entries());
        self.cursor.reset();
    }

    /// Jumps home, or to the filesystem root when already home.
    fn toggle_home(&mut self) {
        let target = match get_home().map(|home| clean_path(&home)) {
            Some(home) if home != self.dir.path() => home,
            _ => root_of(self.dir.path()),
        };
        let _ = self.switch_dir(&target);
    }

    /// Hands the selected entry to the opener worker, spawning it on first use.
    fn open_external(&mut self) -> KeypressResult {
        let Some(path) = self.selected_path() else {
            return KeypressResult::Continue;
        };

        if self.opener.is_none() {
            match OpenCommand::detect() {
                Ok(command) => self.opener = Some(Opener::spawn(command)),
                Err(e) => {
                    tracing::error!(error = %e, "no way to open files externally");
                    return KeypressResult::Exit(Outcome::Unsupported(e.to_string()));
                }
            }
        }

        if let Some(opener) = &self.opener {
            opener.open(path);
        }
        KeypressResult::Continue
    }

    // Prompt handlers

    fn open_create_prompt(&mut self) {
        let max_len = self.config.general().max_prompt_len();
        self.prompt = Some(Prompt::create(max_len));
    }

    fn open_delete_prompt(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let name = entry.name_str().to_string();
        let target = self.dir.entry_path(entry);
        let max_len = self.config.general().max_prompt_len();
        self.prompt = Some(Prompt::delete(target, name, max_len));
    }

    fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Closes the prompt and runs its action, then shows the (possibly changed) directory.
    fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };

        let (kind, input) = prompt.into_parts();
        let failure = match kind {
            PromptKind::Delete { target, name } => {
                if input.trim().eq_ignore_ascii_case("y") {
                    let to_trash = self.config.general().move_to_trash();
                    match remove_path(&target, to_trash) {
                        Ok(()) => {
                            tracing::debug!(%name, "deleted");
                            None
                        }
                        Err(e) => Some(e),
                    }
                } else {
                    tracing::debug!(%name, "delete not confirmed");
                    None
                }
            }
            PromptKind::Create => match create_path(self.dir.path(), &input) {
                Ok(created) => {
                    tracing::debug!(?created, "created");
                    if self.switch_dir(created.view_dir()).is_ok() {
                        return;
                    }
                    None
                }
                Err(e) => Some(e),
            },
        };

        let _ = self.refresh();
        if let Some(e) = failure {
            tracing::warn!(error = %e, "prompt action failed");
            self.message = Some(e.status_text());
        }
    }
}
