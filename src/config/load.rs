//! The main config loading module for horse.
//!
//! Handles loading and deserializing settings from `horse.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! A missing file silently falls back to the internal defaults.

use crate::config::{General, InternalGeneral, Keys, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

const CONFIG_ENV: &str = "HORSE_CONFIG";

/// Raw configuration as read from the toml file.
/// Converted into the main [Config] struct after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    keys: Keys,
}

/// Main configuration struct for horse
#[derive(Debug, Clone)]
pub struct Config {
    general: InternalGeneral,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config {}: {}", path.display(), e);
                    tracing::warn!(path = %path.display(), error = %e, "config parse failed");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config read failed");
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn general_mut(&mut self) -> &mut InternalGeneral {
        &mut self.general
    }

    #[inline]
    pub(crate) fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub(crate) fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the HORSE_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME, then defaults to ~/.config/horse/horse.toml
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("horse/horse.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/horse/horse.toml");
        }
        PathBuf::from("horse.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const DEFAULT_TOML: &str = r##"# horse.toml - default configuration for horse
#
# Commented values are the internal defaults.
# Colours: terminal names ("blue") or hex codes ("#RRGGBB").

[general]
# preview = true
# preview_max_bytes = 50000
# max_query_len = 100
# max_prompt_len = 4096
# move_to_trash = false
# last_path_file = "~/.config/.horselast"   # "" disables

[theme]
# path = { fg = "default", bg = "default" }
# entry = { fg = "default", bg = "default" }
# directory = { fg = "blue", bg = "black" }
# selection = { fg = "black", bg = "white" }
# muted = { fg = "gray", bg = "default" }
# message = { fg = "red", bg = "default" }

[keys]
# quit = ["Esc", "Ctrl+c"]
# select = ["Tab", "Ctrl+l", "Ctrl+f"]
# emit_pwd = ["Enter"]
# go_up = ["Up", "Ctrl+k", "Ctrl+p"]
# go_down = ["Down", "Ctrl+j", "Ctrl+n"]
# backspace = ["Backspace", "Ctrl+b"]
# delete_word = ["Ctrl+w"]
# home = ["Ctrl+e"]
# open_external = ["Ctrl+o"]
# create = ["Ctrl+a"]
# delete = ["Ctrl+d"]
"##;
