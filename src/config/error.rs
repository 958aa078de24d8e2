//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid report service URL format")]
    InvalidReportServiceUrl,

    #[error("Report service URL must use HTTPS in production")]
    ReportServiceMustBeHttps,

    #[error("Invalid report service timeout")]
    InvalidReportServiceTimeout,

    #[error("Request timeout ({request}s) must exceed the report service timeout ({generation}s)")]
    RequestTimeoutBelowGeneration { request: u64, generation: u64 },

    #[error("Export directory must not be empty")]
    EmptyExportDir,
}
