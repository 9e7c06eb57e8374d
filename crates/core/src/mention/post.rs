//! Game mentions in post titles.
//!
//! Giveaway posts are titled like `[Steam] (Game) Outlast`: a bracketed tag
//! naming the platform, a parenthesized release kind, then the game name.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

static STEAM_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[.*(steam).*\]\s*\((game|dlc|beta|alpha)\)").unwrap());
static INDIEGALA_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[.*(indiegala).*\]\s*\((game)\)").unwrap());
static EPIC_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[.*(epic).*\]\s*\((game)\)").unwrap());

/// Platform named in the post tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Steam,
    Indiegala,
    Epic,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Steam => "steam",
            Platform::Indiegala => "indiegala",
            Platform::Epic => "epic",
        }
    }
}

/// Kind of release named in the post tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseKind {
    Game,
    Dlc,
    Beta,
    Alpha,
}

impl ReleaseKind {
    fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "game" => Some(ReleaseKind::Game),
            "dlc" => Some(ReleaseKind::Dlc),
            "beta" => Some(ReleaseKind::Beta),
            "alpha" => Some(ReleaseKind::Alpha),
            _ => None,
        }
    }
}

/// A game named in a post title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMention {
    pub platform: Platform,
    pub kind: ReleaseKind,
    /// Title text following the tag, trimmed.
    pub name: String,
}

/// Extract the tagged game name from a post title.
///
/// Steam tags are checked first, then Indiegala and Epic (which only tag
/// full games). Returns `None` when no tag matches or nothing follows it.
pub fn extract_post_mention(post_title: &str) -> Option<PostMention> {
    [
        (Platform::Steam, &*STEAM_TAG),
        (Platform::Indiegala, &*INDIEGALA_TAG),
        (Platform::Epic, &*EPIC_TAG),
    ]
    .into_iter()
    .find_map(|(platform, tag)| mention_after_tag(platform, tag, post_title))
}

fn mention_after_tag(platform: Platform, tag: &Regex, post_title: &str) -> Option<PostMention> {
    // The name is whatever follows the last tag.
    let caps = tag.captures_iter(post_title).last()?;
    let tag_end = caps.get(0)?.end();
    let kind = ReleaseKind::parse(caps.get(2)?.as_str())?;

    let name = post_title[tag_end..].trim();
    if name.is_empty() {
        return None;
    }

    Some(PostMention {
        platform,
        kind,
        name: name.to_string(),
    })
}
