pub mod config;
pub mod mention;
pub mod numeral;
pub mod resolver;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ServerConfig,
};
pub use mention::{
    extract_post_mention, first_steam_app_id, searchable_query, steam_app_ids, store_search_url,
    Platform, PostMention, ReleaseKind,
};
pub use numeral::{to_integer, to_roman};
pub use resolver::{
    canonicalize, resolve, Candidate, CatalogMode, EquivalenceTest, MatchResult, MatchTrace,
    QueryForm, ResolverConfig, TitleAlias, TitleResolver,
};
