//! Command-line argument parsing for horse.
//!
//! When invoked with no args (`horse`), the browser starts in the current directory.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "horse",
    version,
    about = "Fuzzy-search a directory, hop between folders and print the chosen path",
    after_help = "OUTPUT:\n  On success a single line is printed: `cd <dir>` or `$EDITOR <file>`.\n  Exit code 1 means the user cancelled.\n\nENVIRONMENT:\n  HORSE_CONFIG   Override the default config path\n  HORSE_LOG      Log filter (e.g. \"debug\"), written to the horse log file"
)]
pub struct Cli {
    /// Directory to start in (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Show a preview of the highlighted entry on the right side
    #[arg(short = 'p', long, conflicts_with = "no_preview")]
    pub preview: bool,

    /// Never show the preview pane
    #[arg(long)]
    pub no_preview: bool,

    /// Generate a default configuration file and exit
    #[arg(long)]
    pub init: bool,

    /// Print the default key bindings and exit
    #[arg(long)]
    pub keybinds: bool,
}

impl Cli {
    /// The preview override from the command line, if any.
    pub fn preview_override(&self) -> Option<bool> {
        match (self.preview, self.no_preview) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

pub const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  quit                      ["Esc", "Ctrl+c"]          exit with status 1
  select                    ["Tab", "Ctrl+l", "Ctrl+f"] enter directory / pick file
  emit_pwd                  ["Enter"]                  print `cd` for the current directory or filtered pick
  go_up                     ["Up", "Ctrl+k", "Ctrl+p"]
  go_down                   ["Down", "Ctrl+j", "Ctrl+n"]
  backspace                 ["Backspace", "Ctrl+b"]    delete a query character, or go up a directory
  delete_word               ["Ctrl+w"]                 clear the query
  home                      ["Ctrl+e"]                 toggle between home and the filesystem root
  open_external             ["Ctrl+o"]                 open with the default application
  create                    ["Ctrl+a"]                 create a file, or a directory with a trailing '/'
  delete                    ["Ctrl+d"]                 delete the highlighted entry

  Any other printable key extends the search query.

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   "space", "back", "enter", "esc", "tab", "up", "down"
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_flags() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["horse", "-p"])?;
        assert_eq!(cli.preview_override(), Some(true));

        let cli = Cli::try_parse_from(["horse", "--no-preview", "/tmp"])?;
        assert_eq!(cli.preview_override(), Some(false));
        assert_eq!(cli.path, Some(PathBuf::from("/tmp")));

        let cli = Cli::try_parse_from(["horse"])?;
        assert_eq!(cli.preview_override(), None);
        Ok(())
    }

    #[test]
    fn preview_flags_conflict() {
        assert!(Cli::try_parse_from(["horse", "-p", "--no-preview"]).is_err());
    }
}
