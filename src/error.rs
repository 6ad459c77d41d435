//! Error types for horse.
//!
//! Every fallible operation in the library returns [Result], carrying a [HorseError].
//! Most variants are recovered locally by the session (the previous directory stays on screen),
//! only terminal setup failures bubble up to `main`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HorseError {
    /// An empty target was handed to a directory switch.
    #[error("cannot switch to an empty path")]
    EmptyPath,

    /// A relative target was handed to a directory switch.
    #[error("path must be absolute: {0:?}")]
    NotAbsolute(PathBuf),

    /// The directory exists in the session's view but its entries could not be listed.
    #[error("cannot read directory {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A create/delete issued from a prompt failed.
    #[error("{op} failed on {path:?}: {source}")]
    FileOp {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("trash error: {0}")]
    Trash(#[from] trash::Error),

    /// No native "open with default application" mechanism was found.
    #[error("opening files externally is not supported on this platform ({0})")]
    UnsupportedPlatform(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HorseError {
    /// Short human readable form for the status line.
    pub(crate) fn status_text(&self) -> String {
        match self {
            HorseError::Unreadable { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
                "Permission denied".to_string()
            }
            HorseError::Unreadable { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                "Directory no longer exists".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HorseError>;
