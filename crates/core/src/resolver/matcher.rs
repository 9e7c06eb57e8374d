//! The title resolver: strict equivalence cascade plus relaxed fallback.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::resolver::canonical::{canonicalize, CanonicalTitle};
use crate::resolver::config::{CatalogMode, ResolverConfig};
use crate::resolver::types::{Candidate, EquivalenceTest, MatchResult, MatchTrace, QueryForm};
use crate::resolver::variants::QueryForms;

/// Resolves a free-form title against an ordered candidate list.
///
/// Stateless apart from its configuration: every call builds its own query
/// forms, so one resolver can be shared freely between threads.
///
/// Resolution runs in two passes over the candidates, in input order:
/// 1. Strict: exact text, same word set, or same sorted characters, tried
///    against the literal query and both numeral variants. Delisted catalogs
///    also accept containment here.
/// 2. Relaxed (optional): the query, or each of its words, appears in a
///    candidate that is at most one word longer than the query.
///
/// The first candidate accepted wins; nothing is scored.
#[derive(Debug, Clone, Default)]
pub struct TitleResolver {
    config: ResolverConfig,
}

impl TitleResolver {
    /// Create a resolver for store search results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with custom config.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Find the identifier of the first candidate matching `query`.
    pub fn resolve<Id: Clone>(&self, query: &str, candidates: &[Candidate<Id>]) -> MatchResult<Id> {
        self.resolve_with_trace(query, candidates)
            .map(|hit| candidates[hit.index].id.clone())
            .into()
    }

    /// Like [`resolve`](Self::resolve), but report where and how the match
    /// happened instead of the identifier.
    pub fn resolve_with_trace<Id>(
        &self,
        query: &str,
        candidates: &[Candidate<Id>],
    ) -> Option<MatchTrace> {
        if candidates.is_empty() {
            debug!("No candidates to resolve {:?} against", query);
            return None;
        }

        let query = self.rewrite_aliases(query);
        let forms = QueryForms::new(&query);
        if forms.literal().is_empty() {
            debug!("Query {:?} is empty after normalization", query);
            return None;
        }

        let titles = self.canonical_candidates(&query, candidates);
        trace!(
            "Resolving {:?} ({} of {} candidates considered)",
            forms.literal().as_str(),
            titles.len(),
            candidates.len()
        );

        if let Some(hit) = self.strict_pass(&forms, &titles) {
            debug!(
                "Resolved {:?} to candidate {} via {} on {} form",
                query,
                hit.index,
                hit.test.as_str(),
                hit.form.as_str()
            );
            return Some(hit);
        }

        if !self.config.relaxed_fallback {
            debug!("No strict match for {:?}, relaxed fallback disabled", query);
            return None;
        }

        if self.mentions_random(forms.literal()) {
            debug!("No strict match for {:?}, random request skips fallback", query);
            return None;
        }

        let hit = self.relaxed_pass(&forms, &titles);
        match &hit {
            Some(hit) => debug!(
                "Resolved {:?} to candidate {} via {} on {} form",
                query,
                hit.index,
                hit.test.as_str(),
                hit.form.as_str()
            ),
            None => debug!("No match for {:?}", query),
        }
        hit
    }

    /// Apply alias rewrites (delisted catalogs only).
    fn rewrite_aliases<'a>(&self, query: &'a str) -> Cow<'a, str> {
        let mut rewritten = Cow::Borrowed(query);
        if self.config.mode != CatalogMode::Delisted {
            return rewritten;
        }

        for alias in &self.config.aliases {
            if !alias.from.is_empty() && rewritten.contains(alias.from.as_str()) {
                rewritten = Cow::Owned(rewritten.replace(alias.from.as_str(), &alias.to));
            }
        }
        rewritten
    }

    /// Canonicalize candidate titles, keeping their input positions.
    fn canonical_candidates<Id>(
        &self,
        query: &str,
        candidates: &[Candidate<Id>],
    ) -> Vec<(usize, CanonicalTitle)> {
        let anchor = match self.config.mode {
            CatalogMode::Delisted if self.config.anchor_prefilter => query.split_whitespace().next(),
            _ => None,
        };

        candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| anchor.is_none_or(|word| c.title.contains(word)))
            .map(|(index, c)| (index, CanonicalTitle::new(&c.title)))
            .collect()
    }

    fn strict_pass(
        &self,
        forms: &QueryForms,
        titles: &[(usize, CanonicalTitle)],
    ) -> Option<MatchTrace> {
        titles.iter().find_map(|(index, title)| {
            forms.iter().find_map(|(form, query)| {
                self.strict_test(query, title).map(|test| MatchTrace {
                    index: *index,
                    test,
                    form,
                })
            })
        })
    }

    fn strict_test(&self, query: &CanonicalTitle, title: &CanonicalTitle) -> Option<EquivalenceTest> {
        if title.is_exact(query) {
            Some(EquivalenceTest::Exact)
        } else if title.has_same_words(query) {
            Some(EquivalenceTest::WordSet)
        } else if title.has_same_characters(query) {
            Some(EquivalenceTest::SortedCharacters)
        } else if self.config.mode.strict_containment()
            && !self.mentions_random(query)
            && title.contains(query)
        {
            Some(EquivalenceTest::Containment)
        } else {
            None
        }
    }

    fn relaxed_pass(
        &self,
        forms: &QueryForms,
        titles: &[(usize, CanonicalTitle)],
    ) -> Option<MatchTrace> {
        titles.iter().find_map(|(index, title)| {
            forms.iter().find_map(|(form, query)| {
                Self::relaxed_test(query, title).map(|test| MatchTrace {
                    index: *index,
                    test,
                    form,
                })
            })
        })
    }

    /// Tolerates one extra word in the candidate, never more.
    fn relaxed_test(query: &CanonicalTitle, title: &CanonicalTitle) -> Option<EquivalenceTest> {
        if title.word_count() > query.word_count() + 1 {
            return None;
        }

        if title.contains(query) {
            Some(EquivalenceTest::RelaxedSubstring)
        } else if title.contains_all_words_of(query) {
            Some(EquivalenceTest::RelaxedWords)
        } else {
            None
        }
    }

    fn mentions_random(&self, query: &CanonicalTitle) -> bool {
        self.config.random_sentinels.iter().any(|sentinel| {
            let sentinel = canonicalize(sentinel);
            !sentinel.is_empty() && query.as_str().contains(sentinel.as_str())
        })
    }
}
