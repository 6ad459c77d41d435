//! Configuration for horse.
//!
//! - [load]: reading horse.toml into [Config].
//! - [general]: behaviour switches and limits.
//! - [theme]: colours.
//! - [input]: key bindings.

pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use general::{General, InternalGeneral};
pub use input::Keys;
pub use load::{Config, RawConfig};
pub use theme::Theme;
