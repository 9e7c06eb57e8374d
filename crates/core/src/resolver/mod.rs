//! Title resolution - map a human-written game title onto a search result.
//!
//! Post titles are noisy: typos, shuffled words, "3" versus "III", trademark
//! symbols. The resolver canonicalizes the query and every candidate title,
//! derives numeral variants of the query, and walks the candidates in order
//! until one passes an equivalence test.
//!
//! # Example
//!
//! ```
//! use titlelink_core::resolver::{resolve, Candidate, MatchResult};
//!
//! let candidates = vec![
//!     Candidate::new("Sid Meier's Civilization V", 8930u32),
//!     Candidate::new("Civilization VI", 289070u32),
//! ];
//!
//! assert_eq!(resolve("Civilization 6", &candidates, true), MatchResult::Found(289070));
//! assert_eq!(resolve("Subnautica", &candidates, true), MatchResult::NotFound);
//! ```

mod canonical;
mod config;
mod matcher;
mod types;
mod variants;

pub use canonical::{canonicalize, CanonicalTitle};
pub use config::{CatalogMode, ResolverConfig, TitleAlias};
pub use matcher::TitleResolver;
pub use types::{Candidate, EquivalenceTest, MatchResult, MatchTrace, QueryForm};
pub use variants::{number_variant, roman_variant, QueryForms};

/// Resolve `query` against store search results.
///
/// Shorthand for a store-mode [`TitleResolver`] with the relaxed fallback
/// switched on or off.
pub fn resolve<Id: Clone>(
    query: &str,
    candidates: &[Candidate<Id>],
    relaxed_fallback: bool,
) -> MatchResult<Id> {
    TitleResolver::with_config(ResolverConfig::store().with_relaxed_fallback(relaxed_fallback))
        .resolve(query, candidates)
}
