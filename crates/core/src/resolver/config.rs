//! Resolver configuration types.

use serde::{Deserialize, Serialize};

/// Which catalog the candidates come from.
///
/// Both modes share the equivalence tests; delisted catalogs also accept a
/// candidate that merely contains the query, and rewrite known aliases first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogMode {
    /// Live store search results.
    #[default]
    Store,
    /// Banned/delisted app listings.
    Delisted,
}

impl CatalogMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogMode::Store => "store",
            CatalogMode::Delisted => "delisted",
        }
    }

    /// Whether containment counts as a strict match in this mode.
    pub fn strict_containment(&self) -> bool {
        matches!(self, CatalogMode::Delisted)
    }

    /// Relaxed fallback setting used when none is given: on for the store,
    /// off for delisted catalogs.
    pub fn default_relaxed_fallback(&self) -> bool {
        matches!(self, CatalogMode::Store)
    }
}

/// Literal rewrite applied to the raw query in delisted mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleAlias {
    /// Case-sensitive text to look for.
    pub from: String,
    /// Replacement.
    pub to: String,
}

impl TitleAlias {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Resolver configuration.
///
/// When `relaxed_fallback` is absent from the source it follows `mode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResolverConfigSource")]
pub struct ResolverConfig {
    /// Catalog flavour.
    pub mode: CatalogMode,
    /// Run the relaxed one-word-tolerance pass when nothing matched strictly.
    pub relaxed_fallback: bool,
    /// Query words meaning "pick something random". A query containing one
    /// never matches by containment.
    pub random_sentinels: Vec<String>,
    /// Delisted mode: only consider candidates whose raw title contains the
    /// first word of the query, as an anchor listing would.
    pub anchor_prefilter: bool,
    /// Query rewrites for delisted catalogs.
    pub aliases: Vec<TitleAlias>,
}

/// `[resolver]` section as written in config files.
#[derive(Deserialize)]
struct ResolverConfigSource {
    #[serde(default)]
    mode: CatalogMode,
    #[serde(default)]
    relaxed_fallback: Option<bool>,
    #[serde(default = "default_random_sentinels")]
    random_sentinels: Vec<String>,
    #[serde(default)]
    anchor_prefilter: bool,
    #[serde(default = "default_aliases")]
    aliases: Vec<TitleAlias>,
}

impl From<ResolverConfigSource> for ResolverConfig {
    fn from(source: ResolverConfigSource) -> Self {
        Self {
            mode: source.mode,
            relaxed_fallback: source
                .relaxed_fallback
                .unwrap_or_else(|| source.mode.default_relaxed_fallback()),
            random_sentinels: source.random_sentinels,
            anchor_prefilter: source.anchor_prefilter,
            aliases: source.aliases,
        }
    }
}

fn default_random_sentinels() -> Vec<String> {
    vec!["random".to_string()]
}

fn default_aliases() -> Vec<TitleAlias> {
    vec![TitleAlias::new("TOTI", "Trials of the Illuminati")]
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: CatalogMode::default(),
            relaxed_fallback: CatalogMode::default().default_relaxed_fallback(),
            random_sentinels: default_random_sentinels(),
            anchor_prefilter: false,
            aliases: default_aliases(),
        }
    }
}

impl ResolverConfig {
    /// Store search defaults.
    pub fn store() -> Self {
        Self::default()
    }

    /// Delisted catalog defaults: containment on, no relaxed pass.
    pub fn delisted() -> Self {
        Self::default().with_mode(CatalogMode::Delisted)
    }

    /// Switch catalog mode, resetting the relaxed fallback to the new mode's
    /// default. Chain [`with_relaxed_fallback`](Self::with_relaxed_fallback)
    /// afterwards to override it.
    pub fn with_mode(mut self, mode: CatalogMode) -> Self {
        self.mode = mode;
        self.relaxed_fallback = mode.default_relaxed_fallback();
        self
    }

    pub fn with_relaxed_fallback(mut self, enabled: bool) -> Self {
        self.relaxed_fallback = enabled;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(alias) = self.aliases.iter().find(|a| a.from.trim().is_empty()) {
            return Err(format!(
                "alias 'from' must not be empty (to = {:?})",
                alias.to
            ));
        }

        if self.random_sentinels.iter().any(|s| s.trim().is_empty()) {
            return Err("random_sentinels must not contain empty entries".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.mode, CatalogMode::Store);
        assert!(config.relaxed_fallback);
        assert_eq!(config.random_sentinels, vec!["random"]);
        assert_eq!(config.aliases.len(), 1);
        assert_eq!(config.aliases[0].from, "TOTI");
        assert!(!config.anchor_prefilter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_delisted_config() {
        let config = ResolverConfig::delisted();
        assert_eq!(config.mode, CatalogMode::Delisted);
        assert!(!config.relaxed_fallback);
        assert!(config.mode.strict_containment());
        assert!(!CatalogMode::Store.strict_containment());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ResolverConfig = serde_json::from_str(r#"{"mode":"delisted"}"#).unwrap();
        assert_eq!(config, ResolverConfig::delisted());
        assert!(!config.relaxed_fallback);
        assert_eq!(config.random_sentinels, vec!["random"]);
    }

    #[test]
    fn test_deserialize_explicit_fallback_wins_over_mode() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"mode":"delisted","relaxed_fallback":true}"#).unwrap();
        assert_eq!(config.mode, CatalogMode::Delisted);
        assert!(config.relaxed_fallback);

        let config: ResolverConfig =
            serde_json::from_str(r#"{"relaxed_fallback":false}"#).unwrap();
        assert_eq!(config.mode, CatalogMode::Store);
        assert!(!config.relaxed_fallback);
    }

    #[test]
    fn test_with_mode_resets_fallback() {
        let config = ResolverConfig::store().with_mode(CatalogMode::Delisted);
        assert!(!config.relaxed_fallback);

        let config = ResolverConfig::delisted()
            .with_relaxed_fallback(true)
            .with_mode(CatalogMode::Store);
        assert!(config.relaxed_fallback);
    }

    #[test]
    fn test_serialize_round_trip_keeps_fallback() {
        let config = ResolverConfig::delisted().with_relaxed_fallback(true);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ResolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_unknown_mode_fails() {
        let result: Result<ResolverConfig, _> = serde_json::from_str(r#"{"mode":"archive"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_empty_alias() {
        let mut config = ResolverConfig::default();
        config.aliases.push(TitleAlias::new(" ", "Something"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_sentinel() {
        let mut config = ResolverConfig::default();
        config.random_sentinels.push(String::new());
        assert!(config.validate().is_err());
    }
}
