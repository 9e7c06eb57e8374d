//! Steam app ids from store and SteamDB links.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static APP_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:store\.steampowered\.com(?:/agecheck)?|steamdb\.info)/app/(\d+)").unwrap()
});

/// All app ids linked from `text`, in order of first appearance.
///
/// Recognises `store.steampowered.com/app/<id>` (optionally behind
/// `/agecheck`) and `steamdb.info/app/<id>`, with or without a scheme.
/// Ids that do not fit `u32` are skipped.
pub fn steam_app_ids(text: &str) -> Vec<u32> {
    let mut ids: Vec<u32> = Vec::new();
    for caps in APP_LINK.captures_iter(text) {
        let Some(id) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
            continue;
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// The first app id linked from `text`.
pub fn first_steam_app_id(text: &str) -> Option<u32> {
    steam_app_ids(text).into_iter().next()
}
