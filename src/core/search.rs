//! The incremental search and rank engine for horse.
//!
//! [search] filters one directory listing against a query and orders the survivors in three
//! tiers: exact name, name prefix, then fuzzy subsequence matches. Fuzzy matching is done with
//! the fuzzy_matcher crate's skim algorithm over per-character lowercased text.
//!
//! Results are indices into the entry slice that was searched, so a result set can never
//! outlive or point into another directory's listing once the caller drops it.

use crate::core::FileEntry;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::cmp::Ordering;

/// Outcome of a search.
///
/// `Unfiltered` means "no filter active, show everything" and is different
/// from `Matches` holding an empty vector, which means nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Unfiltered,
    Matches(Vec<usize>),
}

impl SearchOutcome {
    pub fn is_unfiltered(&self) -> bool {
        matches!(self, SearchOutcome::Unfiltered)
    }

    /// The matched indices, empty for both `Unfiltered` and no matches.
    pub fn into_indices(self) -> Vec<usize> {
        match self {
            SearchOutcome::Unfiltered => Vec::new(),
            SearchOutcome::Matches(found) => found,
        }
    }
}

/// Which tier a name matched a query in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchClass {
    Exact,
    Prefix,
    Fuzzy,
}

/// Exact and prefix checks compare raw names, case-sensitively.
fn literal_class(name: &str, query: &str) -> Option<MatchClass> {
    if name == query {
        Some(MatchClass::Exact)
    } else if name.starts_with(query) {
        Some(MatchClass::Prefix)
    } else {
        None
    }
}

/// Classifies a name against a query. `None` when it does not match at all.
pub fn classify(name: &str, query: &str) -> Option<MatchClass> {
    literal_class(name, query)
        .or_else(|| fuzzy_matches(name, query).then_some(MatchClass::Fuzzy))
}

/// The matcher's own case folding is ASCII only, both sides go through [fold_case] first.
fn matcher() -> SkimMatcherV2 {
    SkimMatcherV2::default().ignore_case()
}

/// Per-char Unicode lowercase. Folding `q + c` always yields `fold(q)` followed by `fold(c)`.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive "does query fuzzy-match name".
pub(crate) fn fuzzy_matches(name: &str, query: &str) -> bool {
    matcher()
        .fuzzy_match(&fold_case(name), &fold_case(query))
        .is_some()
}

/// Ranked fuzzy matches among candidates, best alignment first.
///
/// Returns `(index, score)` pairs in the raw order of the matcher's scores;
/// equal scores keep candidate order.
pub(crate) fn fuzzy_rank<'a, I>(candidates: I, query: &str) -> Vec<(usize, i64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = matcher();
    let query = fold_case(query);
    let mut ranked: Vec<(usize, i64)> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            matcher
                .fuzzy_match(&fold_case(name), &query)
                .map(|score| (idx, score))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

struct Candidate<'a> {
    idx: usize,
    name: &'a str,
    lower: String,
    class: MatchClass,
    score: i64,
}

impl<'a> Candidate<'a> {
    fn new(idx: usize, name: &'a str, class: MatchClass, score: i64) -> Self {
        Candidate {
            idx,
            name,
            lower: fold_case(name),
            class,
            score,
        }
    }
}

/// Tie-break used inside the prefix tier: shorter names first, then case-insensitive lexical.
fn prefix_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.name
        .len()
        .cmp(&b.name.len())
        .then_with(|| a.lower.cmp(&b.lower))
        .then_with(|| a.name.cmp(b.name))
}

/// Tie-break used inside the fuzzy tier: best score, case-insensitive lexical, shorter first.
fn fuzzy_order(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.lower.cmp(&b.lower))
        .then_with(|| a.name.len().cmp(&b.name.len()))
        .then_with(|| a.name.cmp(b.name))
}

/// Filters and ranks `entries` against `query`.
///
/// An empty query yields [SearchOutcome::Unfiltered]. Otherwise the returned indices are ordered
/// exact matches, then prefix matches, then fuzzy matches. Non-matching entries are dropped.
pub fn search(entries: &[FileEntry], query: &str) -> SearchOutcome {
    if query.is_empty() {
        return SearchOutcome::Unfiltered;
    }

    let mut found: Vec<Candidate> = Vec::new();
    let mut rest: Vec<(usize, &str)> = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let name = entry.name_str();
        match literal_class(name, query) {
            Some(class) => found.push(Candidate::new(idx, name, class, 0)),
            None => rest.push((idx, name)),
        }
    }

    found.extend(
        fuzzy_rank(rest.iter().map(|r| r.1), query)
            .into_iter()
            .map(|(pos, score)| {
                let (idx, name) = rest[pos];
                Candidate::new(idx, name, MatchClass::Fuzzy, score)
            }),
    );

    found.sort_by(|a, b| {
        a.class.cmp(&b.class).then_with(|| match a.class {
            MatchClass::Exact => Ordering::Equal,
            MatchClass::Prefix => prefix_order(a, b),
            MatchClass::Fuzzy => fuzzy_order(a, b),
        })
    });

    SearchOutcome::Matches(found.into_iter().map(|c| c.idx).collect())
}
