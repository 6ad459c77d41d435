//! The directory store of horse.
//!
//! [DirectoryState] pairs the cleaned working directory with its listing.
//! It is only ever built whole by [DirectoryState::read], so a path is never
//! observed together with the entries of another directory.

use crate::core::{FileEntry, browse_dir};
use crate::error::{HorseError, Result};
use crate::utils::{clean_path, dir_display, parent_by_segments};

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DirectoryState {
    path: PathBuf,
    entries: Vec<FileEntry>,
}

impl DirectoryState {
    /// Cleans `target` and lists it.
    ///
    /// Empty and relative targets are rejected before touching the filesystem.
    pub(crate) fn read(target: &Path) -> Result<Self> {
        if target.as_os_str().is_empty() {
            tracing::error!("directory switch with an empty path");
            return Err(HorseError::EmptyPath);
        }
        if !target.is_absolute() {
            tracing::error!(target = %target.display(), "directory switch with a relative path");
            return Err(HorseError::NotAbsolute(target.to_path_buf()));
        }

        let path = clean_path(target);
        let entries = browse_dir(&path).map_err(|source| HorseError::Unreadable {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), entries = entries.len(), "read directory");
        Ok(Self { path, entries })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The working directory with exactly one trailing separator.
    pub fn pwd(&self) -> String {
        dir_display(&self.path)
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Absolute path of an entry of this listing.
    pub(crate) fn entry_path(&self, entry: &FileEntry) -> PathBuf {
        self.path.join(entry.name())
    }

    /// Parent obtained by dropping the last path segment, `None` at the top.
    pub fn parent(&self) -> Option<PathBuf> {
        parent_by_segments(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_cleans_and_lists() -> std::result::Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;
        fs::write(dir.path().join("file.txt"), "x")?;

        let messy = dir.path().join("sub").join("..").join(".");
        let state = DirectoryState::read(&messy)?;

        assert_eq!(state.path(), clean_path(dir.path()));
        assert_eq!(state.entries().len(), 2);
        assert!(state.pwd().ends_with(std::path::MAIN_SEPARATOR));
        assert!(!state.pwd().ends_with(&format!("{0}{0}", std::path::MAIN_SEPARATOR)));
        Ok(())
    }

    #[test]
    fn read_rejects_empty_and_relative() {
        assert!(matches!(
            DirectoryState::read(Path::new("")),
            Err(HorseError::EmptyPath)
        ));
        assert!(matches!(
            DirectoryState::read(Path::new("relative/dir")),
            Err(HorseError::NotAbsolute(_))
        ));
    }

    #[test]
    fn read_reports_unreadable() -> std::result::Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x")?;

        assert!(matches!(
            DirectoryState::read(&file),
            Err(HorseError::Unreadable { .. })
        ));
        assert!(matches!(
            DirectoryState::read(&dir.path().join("missing")),
            Err(HorseError::Unreadable { .. })
        ));
        Ok(())
    }

    #[test]
    fn entry_path_joins_name() -> std::result::Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("only"), "x")?;
        let state = DirectoryState::read(dir.path())?;
        let only = state.entries().first().ok_or("listing is empty")?;
        assert_eq!(state.entry_path(only), state.path().join("only"));
        Ok(())
    }
}
