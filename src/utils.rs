//! Miscellaneous utility functions for horse.
//!
//! - [cli]: command-line flags.
//! - [helpers]: path cleaning, home directory handling and colour parsing.
//! - [logging]: file logging setup.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{clean_path, dir_display, root_of, write_last_path};

pub(crate) use helpers::{
    DEFAULT_PROMPT_LEN, DEFAULT_QUERY_LEN, expand_home_path, get_home, parent_by_segments,
    parse_color, shorten_home_path,
};
