//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROGRESS_REPORTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use progress_reports::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod export;
mod report_service;
mod server;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use report_service::ReportServiceConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// local setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote report service (generation and storage)
    #[serde(default)]
    pub report_service: ReportServiceConfig,

    /// Printable document export
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROGRESS_REPORTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROGRESS_REPORTS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PROGRESS_REPORTS__REPORT_SERVICE__BASE_URL=...` -> `report_service.base_url = ...`
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
                    .prefix("PROGRESS_REPORTS")
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
        self.report_service.validate(&self.server.environment)?;
        self.export.validate()?;

        // Generation runs inside the request, so the HTTP layer must not
        // cut it off first.
        if self.report_service.is_remote()
            && self.server.request_timeout_secs <= self.report_service.timeout_secs
        {
            return Err(ValidationError::RequestTimeoutBelowGeneration {
                request: self.server.request_timeout_secs,
                generation: self.report_service.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
