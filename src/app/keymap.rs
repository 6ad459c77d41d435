//! Key mapping and action dispatch system for horse
//!
//! Maps keys to an [Action], parsed from the `[keys]` table of the config.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Every action a bound key can trigger outside of a prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Select,
    EmitPwd,
    GoUp,
    GoDown,
    Backspace,
    DeleteWord,
    Home,
    OpenExternal,
    Create,
    Delete,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built in the config
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub(crate) fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        bind!(keys.quit(),          Action::Quit);
        bind!(keys.select(),        Action::Select);
        bind!(keys.emit_pwd(),      Action::EmitPwd);
        bind!(keys.go_up(),         Action::GoUp);
        bind!(keys.go_down(),       Action::GoDown);
        bind!(keys.backspace(),     Action::Backspace);
        bind!(keys.delete_word(),   Action::DeleteWord);
        bind!(keys.home(),          Action::Home);
        bind!(keys.open_external(), Action::OpenExternal);
        bind!(keys.create(),        Action::Create);
        bind!(keys.delete(),        Action::Delete);

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub(crate) fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Parses "Ctrl+x", "<c-x>", "Enter", "F5" and similar into a [Key].
fn parse_key(s: &str) -> Option<Key> {
    let (mut modifiers, body) = match s.strip_prefix('<').and_then(|b| b.strip_suffix('>')) {
        Some(inner) => split_vim_style(inner)?,
        None => (KeyModifiers::NONE, s),
    };

    let mut code = None;
    for part in body.split('+').filter(|p| !p.is_empty()) {
        if let Some(modifier) = modifier_name(part) {
            modifiers |= modifier;
        } else {
            code = Some(key_code(part, modifiers)?);
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

/// `c-a-x` style: every segment but the last is a modifier letter or name.
fn split_vim_style(inner: &str) -> Option<(KeyModifiers, &str)> {
    let Some((prefixes, last)) = inner.rsplit_once('-') else {
        return Some((KeyModifiers::NONE, inner));
    };

    let mut modifiers = KeyModifiers::NONE;
    for prefix in prefixes.split('-') {
        modifiers |= match prefix.to_lowercase().as_str() {
            "c" | "ctrl" => KeyModifiers::CONTROL,
            "a" | "m" | "alt" => KeyModifiers::ALT,
            "s" | "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }
    Some((modifiers, last))
}

fn modifier_name(part: &str) -> Option<KeyModifiers> {
    match part.to_lowercase().as_str() {
        "ctrl" | "control" => Some(KeyModifiers::CONTROL),
        "alt" | "meta" => Some(KeyModifiers::ALT),
        "shift" => Some(KeyModifiers::SHIFT),
        _ => None,
    }
}

fn key_code(part: &str, modifiers: KeyModifiers) -> Option<KeyCode> {
    let lower = part.to_lowercase();
    let named = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "back" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "space" | "spc" => KeyCode::Char(' '),
        _ => {
            let mut chars = part.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) if modifiers.contains(KeyModifiers::SHIFT) => {
                    Some(KeyCode::Char(c.to_ascii_uppercase()))
                }
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => lower
                    .strip_prefix('f')
                    .and_then(|n| n.parse::<u8>().ok())
                    .map(KeyCode::F),
            };
        }
    };
    Some(named)
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => tracing::warn!(key = %k, ?action, "ignoring unparsable key binding"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn parses_common_forms() {
        let ctrl_c = Key {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(parse_key("Ctrl+c"), Some(ctrl_c));
        assert_eq!(parse_key("<c-c>"), Some(ctrl_c));
        assert_eq!(parse_key("Enter").map(|k| k.code), Some(KeyCode::Enter));
        assert_eq!(parse_key("F5").map(|k| k.code), Some(KeyCode::F(5)));
        assert_eq!(parse_key("Nonsense"), None);
    }

    #[test]
    fn default_bindings_resolve() {
        let config = Config::default();
        let keymap = Keymap::from_config(&config);

        let lookup = |code, modifiers| keymap.lookup(KeyEvent::new(code, modifiers));
        assert_eq!(lookup(KeyCode::Esc, KeyModifiers::NONE), Some(Action::Quit));
        assert_eq!(lookup(KeyCode::Tab, KeyModifiers::NONE), Some(Action::Select));
        assert_eq!(lookup(KeyCode::Enter, KeyModifiers::NONE), Some(Action::EmitPwd));
        assert_eq!(lookup(KeyCode::Char('n'), KeyModifiers::CONTROL), Some(Action::GoDown));
        assert_eq!(lookup(KeyCode::Char('w'), KeyModifiers::CONTROL), Some(Action::DeleteWord));
        assert_eq!(lookup(KeyCode::Char('x'), KeyModifiers::NONE), None);
    }
}
