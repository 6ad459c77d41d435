//! The general configuration settings for horse.
//!
//! [General] is deserialized from the `[general]` table of horse.toml,
//! [InternalGeneral] is the validated form used at runtime.

use crate::utils::{DEFAULT_PROMPT_LEN, DEFAULT_QUERY_LEN, expand_home_path, get_home};

use serde::Deserialize;
use std::path::PathBuf;

/// Default upper bound for previewed file sizes.
const DEFAULT_PREVIEW_BYTES: u64 = 50_000;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    preview: bool,
    preview_max_bytes: u64,
    max_query_len: usize,
    max_prompt_len: usize,
    move_to_trash: bool,
    last_path_file: Option<String>,
}

impl Default for General {
    fn default() -> Self {
        General {
            preview: true,
            preview_max_bytes: DEFAULT_PREVIEW_BYTES,
            max_query_len: DEFAULT_QUERY_LEN,
            max_prompt_len: DEFAULT_PROMPT_LEN,
            move_to_trash: false,
            last_path_file: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InternalGeneral {
    preview: bool,
    preview_max_bytes: u64,
    max_query_len: usize,
    max_prompt_len: usize,
    move_to_trash: bool,
    last_path_file: Option<PathBuf>,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let last_path_file = match g.last_path_file {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(expand_home_path(s.trim())),
            None => default_last_path_file(),
        };
        Self {
            preview: g.preview,
            preview_max_bytes: g.preview_max_bytes,
            max_query_len: g.max_query_len.max(1),
            max_prompt_len: g.max_prompt_len.max(1),
            move_to_trash: g.move_to_trash,
            last_path_file,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn preview(&self) -> bool {
        self.preview
    }

    #[inline]
    pub(crate) fn preview_max_bytes(&self) -> u64 {
        self.preview_max_bytes
    }

    #[inline]
    pub(crate) fn max_query_len(&self) -> usize {
        self.max_query_len
    }

    #[inline]
    pub(crate) fn max_prompt_len(&self) -> usize {
        self.max_prompt_len
    }

    #[inline]
    pub(crate) fn move_to_trash(&self) -> bool {
        self.move_to_trash
    }

    #[inline]
    pub fn last_path_file(&self) -> Option<&PathBuf> {
        self.last_path_file.as_ref()
    }

    pub fn set_preview(&mut self, preview: bool) {
        self.preview = preview;
    }
}

/// `~/.config/.horselast`
fn default_last_path_file() -> Option<PathBuf> {
    get_home().map(|home| home.join(".config").join(".horselast"))
}
