//! Helpers for horse.
//!
//! Path cleaning and formatting used by the directory store, home directory lookup,
//! and colour parsing for the theme.

use ratatui::style::Color;
use std::fs;
use std::io;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Maximum length of a prompt input, roughly one path's worth.
pub(crate) const DEFAULT_PROMPT_LEN: usize = 4096;
/// Maximum length of the search query.
pub(crate) const DEFAULT_QUERY_LEN: usize = 100;

/// Lexically cleans a path: drops `.` segments, resolves `..` against the preceding segment,
/// collapses duplicate separators and strips any trailing separator.
///
/// `..` never climbs above the root of an absolute path. Symlinks are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(seg) => {
                out.push(seg);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Renders a directory path with exactly one trailing separator.
pub fn dir_display(path: &Path) -> String {
    let mut s = path.display().to_string();
    if !s.ends_with(MAIN_SEPARATOR) {
        s.push(MAIN_SEPARATOR);
    }
    s
}

/// Drops the last named segment of an absolute path.
///
/// Returns `None` when only one named segment (or none) is left.
pub(crate) fn parent_by_segments(path: &Path) -> Option<PathBuf> {
    let segments: Vec<Component> = path
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();
    if segments.len() <= 1 {
        return None;
    }

    let mut parent: PathBuf = path
        .components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    parent.extend(&segments[..segments.len() - 1]);
    Some(parent)
}

/// Filesystem root that `path` lives under.
pub fn root_of(path: &Path) -> PathBuf {
    path.ancestors()
        .last()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(MAIN_SEPARATOR.to_string()))
}

/// Returns the user's home directory, if known.
pub(crate) fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory.
pub(crate) fn expand_home_path(input: &str) -> PathBuf {
    if let Some(home) = get_home() {
        if input == "~" {
            return home;
        }
        if let Some(rest) = input
            .strip_prefix("~/")
            .or_else(|| input.strip_prefix(&format!("~{}", MAIN_SEPARATOR)))
        {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Util function to shorten home directory to ~.
/// Used for the path shown in the header line.
pub(crate) fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return format!("~{}", MAIN_SEPARATOR);
        }
        return format!("~{}{}", MAIN_SEPARATOR, dir_display(stripped));
    }
    dir_display(path)
}

/// Records the last emitted path in the marker file, creating its directory if needed.
pub fn write_last_path(marker: &Path, chosen: &Path) -> io::Result<()> {
    if let Some(parent) = marker.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(marker, chosen.as_os_str().as_encoded_bytes())
}

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub(crate) fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect(),
                    _ => return Color::Reset,
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}
