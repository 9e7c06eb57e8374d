use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Resolver aliases and random sentinels are not blank
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    config
        .resolver
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("resolver: {}", e)))?;

    Ok(())
}
