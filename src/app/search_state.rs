//! Type-ahead query state for horse.
//!
//! Holds the query typed so far and the indices it selects from the current listing.
//! Indices always refer to the [DirectoryState](crate::app::DirectoryState) the search ran on,
//! the session clears this state on every directory switch.

use crate::core::{FileEntry, search};

#[derive(Debug, Default, Clone)]
pub struct SearchState {
    query: String,
    results: Vec<usize>,
    dead_end: Option<String>,
}

impl SearchState {
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    /// True when a non-empty query currently narrows the listing.
    #[inline]
    pub(crate) fn is_filtering(&self) -> bool {
        !self.results.is_empty()
    }

    /// Appends `c` to the query if the longer query still matches something.
    ///
    /// Returns false and leaves the state untouched when the keystroke is refused,
    /// either because the query is at `max_len` or because nothing would match.
    pub fn try_extend(&mut self, c: char, entries: &[FileEntry], max_len: usize) -> bool {
        if self.query.chars().count() >= max_len {
            return false;
        }

        let mut candidate = self.query.clone();
        candidate.push(c);

        // Extending a query never adds matches.
        if self
            .dead_end
            .as_deref()
            .is_some_and(|dead| candidate.starts_with(dead))
        {
            return false;
        }

        let found = search(entries, &candidate).into_indices();
        if found.is_empty() {
            tracing::debug!(query = %candidate, "no matches, keystroke refused");
            self.dead_end = Some(candidate);
            return false;
        }

        self.query = candidate;
        self.results = found;
        true
    }

    /// Drops the last character, or the whole query with `full_word`, then searches again.
    ///
    /// Falls back to the unfiltered listing when the shorter query matches nothing.
    pub(crate) fn shorten(&mut self, full_word: bool, entries: &[FileEntry]) {
        if full_word {
            self.query.clear();
        } else {
            self.query.pop();
        }
        self.dead_end = None;

        let found = search(entries, &self.query).into_indices();
        if found.is_empty() {
            self.reset();
        } else {
            self.results = found;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.dead_end = None;
    }
}
