//! Inline prompt state for horse.
//!
//! A [Prompt] owns all keyboard input while it is open. What happens on submit
//! is decided by its [PromptKind].

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Ask for a new path relative to the working directory.
    Create,
    /// Confirm removal of `target`.
    Delete { target: PathBuf, name: String },
}

#[derive(Debug, Clone)]
pub struct Prompt {
    label: String,
    input: String,
    kind: PromptKind,
    max_len: usize,
}

impl Prompt {
    pub fn create(max_len: usize) -> Self {
        Self::new("New path (end with / for a directory): ".into(), PromptKind::Create, max_len)
    }

    pub(crate) fn delete(target: PathBuf, name: String, max_len: usize) -> Self {
        let label = format!("Delete {name}? [y/N]: ");
        Self::new(label, PromptKind::Delete { target, name }, max_len)
    }

    fn new(label: String, kind: PromptKind, max_len: usize) -> Self {
        Self {
            label,
            input: String::new(),
            kind,
            max_len: max_len.max(1),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    pub(crate) fn kind(&self) -> &PromptKind {
        &self.kind
    }

    /// Appends `c` unless the input is full.
    pub fn push(&mut self, c: char) -> bool {
        if self.input.chars().count() >= self.max_len {
            return false;
        }
        self.input.push(c);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.input.pop();
    }

    pub(crate) fn into_parts(self) -> (PromptKind, String) {
        (self.kind, self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_capped() {
        let mut prompt = Prompt::create(3);
        for c in "abcd".chars() {
            prompt.push(c);
        }
        assert_eq!(prompt.input(), "abc");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut prompt = Prompt::create(10);
        prompt.backspace();
        assert_eq!(prompt.input(), "");
        prompt.push('x');
        prompt.backspace();
        assert_eq!(prompt.input(), "");
    }

    #[test]
    fn delete_label_names_target() {
        let prompt = Prompt::delete(PathBuf::from("/tmp/victim"), "victim".into(), 10);
        assert!(prompt.label().contains("victim"));
        assert!(matches!(prompt.kind(), PromptKind::Delete { name, .. } if name == "victim"));
    }
}
