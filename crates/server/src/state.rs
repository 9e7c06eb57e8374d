use titlelink_core::{CatalogMode, Config, TitleResolver};

/// Shared application state
pub struct AppState {
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a resolver from the configured defaults and per-request overrides.
    ///
    /// Switching to a different catalog mode also switches the relaxed
    /// fallback to that mode's default (on for the store, off for delisted
    /// catalogs) unless the request sets it explicitly.
    pub fn resolver(
        &self,
        mode: Option<CatalogMode>,
        relaxed_fallback: Option<bool>,
    ) -> TitleResolver {
        let mut config = self.config.resolver.clone();

        if let Some(mode) = mode.filter(|mode| *mode != config.mode) {
            config = config.with_mode(mode);
        }
        if let Some(enabled) = relaxed_fallback {
            config.relaxed_fallback = enabled;
        }

        TitleResolver::with_config(config)
    }
}
