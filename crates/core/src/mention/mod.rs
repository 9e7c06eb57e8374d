//! Where queries come from: post titles, store links and search terms.
//!
//! Pure text helpers for the code that feeds the resolver. Fetching pages
//! and parsing their HTML is left to the caller.

mod links;
mod post;
mod search;

pub use links::{first_steam_app_id, steam_app_ids};
pub use post::{extract_post_mention, Platform, PostMention, ReleaseKind};
pub use search::{searchable_query, store_search_url};
