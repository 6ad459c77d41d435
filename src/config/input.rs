//! Input configuration options for horse
//!
//! This module defines the `[keys]` table read from horse.toml.
//! Each action maps to a list of key strings, parsed later by the keymap.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    select: Vec<String>,
    emit_pwd: Vec<String>,
    go_up: Vec<String>,
    go_down: Vec<String>,
    backspace: Vec<String>,
    delete_word: Vec<String>,
    home: Vec<String>,
    open_external: Vec<String>,
    create: Vec<String>,
    delete: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    quit,
    select,
    emit_pwd,
    go_up,
    go_down,
    backspace,
    delete_word,
    home,
    open_external,
    create,
    delete,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["Esc".into(), "Ctrl+c".into()],
            select: vec!["Tab".into(), "Ctrl+l".into(), "Ctrl+f".into()],
            emit_pwd: vec!["Enter".into()],
            go_up: vec!["Up".into(), "Ctrl+k".into(), "Ctrl+p".into()],
            go_down: vec!["Down".into(), "Ctrl+j".into(), "Ctrl+n".into()],
            backspace: vec!["Backspace".into(), "Ctrl+b".into()],
            delete_word: vec!["Ctrl+w".into()],
            home: vec!["Ctrl+e".into()],
            open_external: vec!["Ctrl+o".into()],
            create: vec!["Ctrl+a".into()],
            delete: vec!["Ctrl+d".into()],
        }
    }
}
