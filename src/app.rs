//! Application state and session logic for horse.
//!
//! - [state]: [AppState], the session controller, and the terminal [Outcome].
//! - [handlers]: action, query and prompt handlers implemented on [AppState].
//! - [directory]: the working directory and its listing.
//! - [search_state]: the type-ahead query and its results.
//! - [nav]: cursor and viewport.
//! - [prompt]: the inline create/delete prompt.
//! - [keymap]: key to [Action](keymap::Action) mapping built from the config.

pub mod directory;
pub mod handlers;
pub mod keymap;
pub mod nav;
pub mod prompt;
pub mod search_state;
pub mod state;

pub use directory::DirectoryState;
pub use keymap::{Action, Keymap};
pub use nav::{CursorState, ViewportConfig};
pub use prompt::{Prompt, PromptKind};
pub use search_state::SearchState;
pub use state::{ActiveList, AppState, KeypressResult, Outcome, PathKind};
