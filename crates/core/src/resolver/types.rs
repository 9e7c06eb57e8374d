//! Resolver input and output types.

use serde::{Deserialize, Serialize};

/// One entry of a search result list.
///
/// `id` is opaque to the resolver; it is handed back untouched on a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate<Id> {
    /// Display title as shown by the store.
    pub title: String,
    /// Caller-defined identifier (app id, URL, ...).
    pub id: Id,
}

impl<Id> Candidate<Id> {
    pub fn new(title: impl Into<String>, id: Id) -> Self {
        Self {
            title: title.into(),
            id,
        }
    }
}

/// Outcome of a resolution. Not finding a match is an ordinary result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<Id> {
    Found(Id),
    NotFound,
}

impl<Id> MatchResult<Id> {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }

    pub fn id(&self) -> Option<&Id> {
        match self {
            MatchResult::Found(id) => Some(id),
            MatchResult::NotFound => None,
        }
    }

    pub fn into_option(self) -> Option<Id> {
        match self {
            MatchResult::Found(id) => Some(id),
            MatchResult::NotFound => None,
        }
    }
}

impl<Id> From<Option<Id>> for MatchResult<Id> {
    fn from(id: Option<Id>) -> Self {
        match id {
            Some(id) => MatchResult::Found(id),
            None => MatchResult::NotFound,
        }
    }
}

/// Which form of the query produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryForm {
    /// The canonical query as written.
    Literal,
    /// Integers rewritten as Roman numerals.
    Roman,
    /// Roman numerals rewritten as integers.
    Number,
}

impl QueryForm {
    pub const ALL: [QueryForm; 3] = [QueryForm::Literal, QueryForm::Roman, QueryForm::Number];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryForm::Literal => "literal",
            QueryForm::Roman => "roman",
            QueryForm::Number => "number",
        }
    }
}

/// Which equivalence test accepted a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalenceTest {
    /// Identical canonical text.
    Exact,
    /// Same words, any order.
    WordSet,
    /// Same sorted characters (typo tolerance).
    SortedCharacters,
    /// Query contained in the candidate (delisted catalogs only).
    Containment,
    /// Fallback: query contained in a candidate at most one word longer.
    RelaxedSubstring,
    /// Fallback: every query word found in a candidate at most one word longer.
    RelaxedWords,
}

impl EquivalenceTest {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquivalenceTest::Exact => "exact",
            EquivalenceTest::WordSet => "word_set",
            EquivalenceTest::SortedCharacters => "sorted_characters",
            EquivalenceTest::Containment => "containment",
            EquivalenceTest::RelaxedSubstring => "relaxed_substring",
            EquivalenceTest::RelaxedWords => "relaxed_words",
        }
    }

    /// True for the tests of the relaxed fallback pass.
    pub fn is_relaxed(&self) -> bool {
        matches!(
            self,
            EquivalenceTest::RelaxedSubstring | EquivalenceTest::RelaxedWords
        )
    }
}

/// Where and how a match happened. Diagnostic only, carries no score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTrace {
    /// Position of the matching candidate in the input list.
    pub index: usize,
    pub test: EquivalenceTest,
    pub form: QueryForm,
}
