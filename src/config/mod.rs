//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VISUAL_FORGE_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use visual_forge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;
mod store;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;

use serde::Deserialize;

use crate::adapters::rate_limiter::RateLimitConfig;

/// Root application configuration
///
/// Contains all configuration sections for the gateway.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream model configuration (Gemini/Clipdrop)
    #[serde(default)]
    pub ai: AiConfig,

    /// Visual store configuration (Firestore)
    #[serde(default)]
    pub store: StoreConfig,

    /// Rate limit configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VISUAL_FORGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VISUAL_FORGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VISUAL_FORGE__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VISUAL_FORGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.store.validate()?;
        if self.rate_limit.window_secs == 0 {
            return Err(ValidationError::InvalidRateLimitWindow);
        }
        if self.rate_limit.max_requests == 0 {
            return Err(ValidationError::InvalidRateLimitMax);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("VISUAL_FORGE__SERVER__PORT");
        env::remove_var("VISUAL_FORGE__SERVER__ENVIRONMENT");
        env::remove_var("VISUAL_FORGE__AI__GEMINI_API_KEY");
        env::remove_var("VISUAL_FORGE__RATE_LIMIT__MAX_REQUESTS");
    }

    #[test]
    fn test_load_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VISUAL_FORGE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_ai_key_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VISUAL_FORGE__AI__GEMINI_API_KEY", "AIza-test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_gemini());
    }

    #[test]
    fn test_rate_limit_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VISUAL_FORGE__RATE_LIMIT__MAX_REQUESTS", "5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window_secs, 900);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VISUAL_FORGE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
