//! Report-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, ValidationError};

use super::quota::{quota_exceeded_message, MAX_REPORTS_PER_PROJECT};

/// Errors surfaced by the report lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Required input missing or malformed.
    ValidationFailed { field: String, message: String },
    /// The project already holds the maximum number of reports.
    QuotaExceeded { limit: u32, current: u32 },
    /// Report was not found.
    NotFound(ReportId),
    /// The generator could not produce a report.
    GenerationFailed(String),
    /// Transport-level failure talking to an external service.
    Network(String),
    /// Invalid status transition.
    InvalidState(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ReportError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReportError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn quota_exceeded(current: u32) -> Self {
        ReportError::QuotaExceeded {
            limit: MAX_REPORTS_PER_PROJECT,
            current,
        }
    }
    pub fn not_found(id: ReportId) -> Self {
        ReportError::NotFound(id)
    }
    pub fn generation_failed(message: impl Into<String>) -> Self {
        ReportError::GenerationFailed(message.into())
    }
    pub fn network(message: impl Into<String>) -> Self {
        ReportError::Network(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReportError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReportError::QuotaExceeded { .. } => ErrorCode::QuotaExceeded,
            ReportError::NotFound(_) => ErrorCode::ReportNotFound,
            ReportError::GenerationFailed(_) => ErrorCode::GenerationFailed,
            ReportError::Network(_) => ErrorCode::NetworkError,
            ReportError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            ReportError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ReportError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ReportError::QuotaExceeded { limit, current } => {
                quota_exceeded_message(*limit, *current)
            }
            ReportError::NotFound(id) => format!("Report not found: {}", id),
            ReportError::GenerationFailed(msg) => format!("Report generation failed: {}", msg),
            ReportError::Network(msg) => format!("Network error: {}", msg),
            ReportError::InvalidState(msg) => format!("Invalid state: {}", msg),
            ReportError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
    /// Whether the caller should send the user to the report list to free capacity.
    pub fn redirects_to_list(&self) -> bool {
        matches!(self, ReportError::QuotaExceeded { .. })
    }
    /// Converts into a `DomainError` carrying structured details.
    pub fn to_domain_error(&self) -> DomainError {
        let err = DomainError::new(self.code(), self.message());
        match self {
            ReportError::ValidationFailed { field, .. } => err.with_detail("field", field.clone()),
            ReportError::QuotaExceeded { limit, current } => err
                .with_detail("limit", limit.to_string())
                .with_detail("current", current.to_string()),
            ReportError::NotFound(id) => err.with_detail("report_id", id.to_string()),
            _ => err,
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReportError {}

impl From<ValidationError> for ReportError {
    fn from(err: ValidationError) -> Self {
        ReportError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ReportError {
    fn from(err: DomainError) -> Self {
        let detail_u32 = |key: &str| err.detail(key).and_then(|v| v.parse::<u32>().ok());
        match err.code {
            ErrorCode::ValidationFailed => ReportError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message.clone(),
            },
            ErrorCode::QuotaExceeded => ReportError::QuotaExceeded {
                limit: detail_u32("limit").unwrap_or(MAX_REPORTS_PER_PROJECT),
                current: detail_u32("current").unwrap_or(MAX_REPORTS_PER_PROJECT),
            },
            ErrorCode::ReportNotFound => match err.detail("report_id").and_then(|v| v.parse().ok()) {
                Some(id) => ReportError::NotFound(id),
                None => ReportError::Infrastructure(err.to_string()),
            },
            ErrorCode::GenerationFailed => ReportError::GenerationFailed(err.message),
            ErrorCode::NetworkError => ReportError::Network(err.message),
            ErrorCode::InvalidStateTransition => ReportError::InvalidState(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                ReportError::Infrastructure(err.to_string())
            }
        }
    }
}
