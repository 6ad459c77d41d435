//! Filesystem mutations issued from prompts.
//!
//! Both operations are synchronous and run on the event loop thread.

use crate::error::{HorseError, Result};
use crate::utils::{clean_path, expand_home_path};

use std::fs;
use std::path::{Path, PathBuf};

/// What [create_path] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    Directory(PathBuf),
    File(PathBuf),
}

impl Created {
    /// The directory the view should switch to so the new entry is visible.
    pub(crate) fn view_dir(&self) -> &Path {
        match self {
            Created::Directory(dir) => dir,
            Created::File(file) => file.parent().unwrap_or(file),
        }
    }
}

fn file_op(op: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> HorseError {
    let path = path.to_path_buf();
    move |source| HorseError::FileOp { op, path, source }
}

/// Creates the path described by `input` relative to `base`.
///
/// A trailing separator requests a directory (all intermediate directories are created).
/// Anything else is an empty file, again creating intermediate directories first.
/// A leading `~` expands to the home directory. An existing file is left untouched.
pub(crate) fn create_path(base: &Path, input: &str) -> Result<Created> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(HorseError::EmptyPath);
    }

    let wants_dir = trimmed.ends_with('/') || trimmed.ends_with(std::path::MAIN_SEPARATOR);
    let target = clean_path(&base.join(expand_home_path(trimmed)));

    if wants_dir {
        fs::create_dir_all(&target).map_err(file_op("create directory", &target))?;
        return Ok(Created::Directory(target));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(file_op("create directory", parent))?;
    }
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&target)
        .map_err(file_op("create file", &target))?;
    Ok(Created::File(target))
}

/// Removes `target`, recursively if it is a real directory.
///
/// Symlinks are removed themselves, never their targets. With `to_trash`
/// the target is moved to the platform trash instead.
pub(crate) fn remove_path(target: &Path, to_trash: bool) -> Result<()> {
    if to_trash {
        trash::delete(target)?;
        return Ok(());
    }

    let meta = fs::symlink_metadata(target).map_err(file_op("delete", target))?;
    if meta.is_dir() {
        fs::remove_dir_all(target).map_err(file_op("delete", target))
    } else {
        fs::remove_file(target).map_err(file_op("delete", target))
    }
}
