//! Core runtime logic for horse.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [fm]: directory reading and the [FileEntry] model (see [browse_dir]).
//! - [search]: the three-tier exact/prefix/fuzzy ranking over a directory listing.
//! - [ops]: create/delete filesystem mutations issued from prompts.
//! - [preview]: bounded file and directory previews for the right-hand pane.
//! - [worker]: fire-and-forget "open externally" background worker.
//! - [terminal]: terminal setup/teardown and the blocking crossterm/ratatui event loop.

pub mod fm;
pub mod ops;
pub mod preview;
pub mod search;
pub mod terminal;
pub mod worker;

pub use fm::FileEntry;
pub use ops::Created;
pub use preview::PreviewLine;
pub use search::{MatchClass, SearchOutcome, search};
pub use worker::{OpenCommand, Opener};

pub(crate) use fm::browse_dir;
pub(crate) use ops::{create_path, remove_path};
pub(crate) use preview::read_preview;
