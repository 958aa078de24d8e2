//! Remote report service configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Remote report service configuration
///
/// When `base_url` is unset the application runs with the in-memory store
/// and the local template generator.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportServiceConfig {
    /// Base URL of the report service
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ReportServiceConfig {
    /// Check if a remote service is configured
    pub fn is_remote(&self) -> bool {
        self.base_url.as_ref().is_some_and(|u| !u.trim().is_empty())
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate report service configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidReportServiceTimeout);
        }

        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidReportServiceUrl);
            }
            if *environment == Environment::Production && !url.starts_with("https://") {
                return Err(ValidationError::ReportServiceMustBeHttps);
            }
        }

        Ok(())
    }
}

impl Default for ReportServiceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    120
}
