//! Terminal UI rendering for horse.
//!
//! - [render]: the per-frame entry point and screen layout.
//! - [panes]: the entry list and the preview pane.
//! - [widgets]: header, footer and separator lines.
//!
//! Rendering only reads [AppState](crate::app::AppState), it never mutates it.

pub mod panes;
pub mod render;
pub mod widgets;

pub use render::{ScreenChunks, layout_chunks, render};
