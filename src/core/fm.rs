//! Directory listing logic for horse.
//!
//! Provides the [FileEntry] struct which is used throughout horse and [browse_dir],
//! the only place a directory is enumerated.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Represents a single entry in a directory listing.
///
/// Entries are immutable once read. A directory refresh produces a brand new set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: Box<OsStr>,
    display: Box<str>,
    flags: u8,
}

impl FileEntry {
    // Flag bit definitions
    pub(crate) const IS_DIR: u8 = 1 << 0;

    pub fn new(name: OsString, flags: u8) -> Self {
        let display = name.to_string_lossy().into_owned().into_boxed_str();
        FileEntry {
            name: name.into_boxed_os_str(),
            display,
            flags,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Lossy UTF-8 form of the name, used for matching and drawing.
    #[inline]
    pub fn name_str(&self) -> &str {
        &self.display
    }

    /// True for directories and for symlinks whose target is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    /// Name as shown in lists: directories get a trailing separator.
    pub(crate) fn display_name(&self) -> Cow<'_, str> {
        if self.is_dir() {
            Cow::Owned(format!("{}{}", self.display, std::path::MAIN_SEPARATOR))
        } else {
            Cow::Borrowed(&self.display)
        }
    }
}

/// Resolves the directory-ness of a single entry, following symlinks.
/// A dangling symlink counts as a file.
fn entry_flags(entry: &fs::DirEntry) -> u8 {
    let Ok(ft) = entry.file_type() else {
        return 0;
    };

    let is_dir = if ft.is_symlink() {
        fs::metadata(entry.path()).is_ok_and(|target| target.is_dir())
    } else {
        ft.is_dir()
    };

    if is_dir { FileEntry::IS_DIR } else { 0 }
}

/// Reads the contents of the provided directory and returns them in a vector of [FileEntry].
///
/// The order is the operating system's enumeration order, nothing is sorted here.
/// Entries that vanish while being enumerated are skipped.
pub(crate) fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let Ok(entry) = entry else {
            continue;
        };

        let flags = entry_flags(&entry);
        entries.push(FileEntry::new(entry.file_name(), flags));
    }
    Ok(entries)
}
