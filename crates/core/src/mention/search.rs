//! Store search terms.

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

static DLC_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)dlc").unwrap());
// regex-lite's `\w` is ASCII-only; the follower is checked in `space_after_dash`.
static DASH_FOLLOWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-([^-])").unwrap());

const STORE_SEARCH_URL: &str = "https://store.steampowered.com/search/";

/// Prepare a game name for the store search box.
///
/// Leading dashes and "DLC" are dropped, and a dash glued to the next word
/// gets a space after it; the store search otherwise ignores that word.
pub fn searchable_query(name: &str) -> String {
    let name = name.trim().trim_start_matches('-');
    let name = DLC_WORD.replace_all(name, "");
    let name = name.replace("  ", " ");
    let name = name.trim();
    DASH_FOLLOWER
        .replace_all(name, |caps: &Captures<'_>| space_after_dash(&caps[1]))
        .into_owned()
}

/// `-x` becomes `- x` when `x` is a word character in any script.
fn space_after_dash(follower: &str) -> String {
    let is_word = follower
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    if is_word {
        format!("- {}", follower)
    } else {
        format!("-{}", follower)
    }
}

/// Store search URL for a term, ignoring user store preferences.
pub fn store_search_url(term: &str) -> String {
    format!(
        "{}?term={}&ignore_preferences=1",
        STORE_SEARCH_URL,
        urlencoding::encode(term)
    )
}
