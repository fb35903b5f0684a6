//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_RECOMMENDER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_recommender::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().expect("Failed to initialise logging");
//! ```

mod ahp;
mod database;
mod error;
mod logging;

pub use ahp::AhpConfig;
pub use database::{DatabaseConfig, PoolSettings};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Consistency threshold and random index table
    #[serde(default)]
    pub ahp: AhpConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_RECOMMENDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_RECOMMENDER__DATABASE__URL=...` -> `database.url = ...`
    /// - `AHP_RECOMMENDER__DATABASE__POOL__MAX_SIZE=4` -> `database.pool.max_size = 4`
    /// - `AHP_RECOMMENDER__AHP__CONSISTENCY_THRESHOLD=0.1` -> `ahp.consistency_threshold = 0.1`
    /// - `AHP_RECOMMENDER__AHP__RANDOM_INDEX=0,0,0.58,0.9` -> `ahp.random_index = [0, 0, 0.58, 0.9]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_RECOMMENDER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("ahp.random_index"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.ahp.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
