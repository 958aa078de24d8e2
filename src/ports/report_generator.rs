//! Report generator port.
//!
//! Content synthesis (metrics, natural-language text) happens in an external
//! service. The lifecycle only sees the finished report or a typed failure.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::domain::foundation::{ProjectId, ValidationError};
use crate::domain::report::{
    Report, ReportError, ReportPeriod, ReportType, MAX_REPORTS_PER_PROJECT,
};

/// Port for the service that writes report content.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Generate a report for the requested project and window.
    ///
    /// A report whose status is `failed` is a valid result and is returned
    /// as `Ok`; `Err` means no report was produced at all.
    async fn generate(&self, request: &GenerationRequest) -> Result<Report, GenerationError>;
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub project_id: ProjectId,
    pub report_type: ReportType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl GenerationRequest {
    pub fn new(project_id: ProjectId, report_type: ReportType) -> Self {
        Self {
            project_id,
            report_type,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_window(mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Resolves the reporting window. A missing end means `today`; a missing
    /// start means the default window before the end.
    pub fn resolve_period(&self, today: NaiveDate) -> Result<ReportPeriod, ValidationError> {
        let end = self.end_date.unwrap_or(today);
        let start = match self.start_date {
            Some(start) => start,
            None => end
                .checked_sub_signed(Duration::days(ReportPeriod::DEFAULT_DAYS))
                .ok_or_else(|| {
                    ValidationError::invalid_format(
                        "end_date",
                        "default reporting window starts before the earliest supported date",
                    )
                })?,
        };
        ReportPeriod::from_dates(start, end)
    }
}

/// Errors from the generation service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The service enforces the per-project ceiling on its own side.
    #[error("Report quota exceeded")]
    QuotaExceeded { current: Option<u32> },

    #[error("Generation failed: {0}")]
    Failed(String),

    #[error("Generation service unreachable: {0}")]
    Network(String),

    #[error("Generation timed out after {0} seconds")]
    Timeout(u64),
}

impl GenerationError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network(reason.into())
    }
}

impl From<GenerationError> for ReportError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::QuotaExceeded { current } => {
                ReportError::quota_exceeded(current.unwrap_or(MAX_REPORTS_PER_PROJECT))
            }
            GenerationError::Failed(msg) => ReportError::GenerationFailed(msg),
            GenerationError::Network(msg) => ReportError::Network(msg),
            GenerationError::Timeout(secs) => {
                ReportError::Network(format!("request timed out after {} seconds", secs))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_generator_is_object_safe() {
        fn check<T: ReportGenerator + ?Sized>() {}
        check::<dyn ReportGenerator>();
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(ProjectId::new("p1").unwrap(), ReportType::Executive)
    }

    #[test]
    fn explicit_window_is_used_as_given() {
        let period = request()
            .with_window(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))
            .resolve_period(date(2024, 6, 1))
            .unwrap();
        assert_eq!(period.start_date().date(), date(2024, 1, 1));
        assert_eq!(period.end_date().date(), date(2024, 1, 31));
    }

    #[test]
    fn missing_window_defaults_to_trailing_days() {
        let period = request().resolve_period(date(2024, 3, 31)).unwrap();
        assert_eq!(period.end_date().date(), date(2024, 3, 31));
        assert_eq!(period.start_date().date(), date(2024, 3, 1));
    }

    #[test]
    fn reversed_window_is_rejected() {
        let result = request()
            .with_window(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)))
            .resolve_period(date(2024, 6, 1));
        assert!(result.is_err());
    }

    #[test]
    fn start_only_window_after_today_is_rejected() {
        let result = request()
            .with_window(Some(date(2099, 1, 1)), None)
            .resolve_period(date(2024, 6, 1));
        assert!(result.is_err());
    }

    #[test]
    fn default_window_before_earliest_date_is_rejected() {
        let result = request()
            .with_window(None, Some(NaiveDate::MIN))
            .resolve_period(date(2024, 6, 1));
        assert!(result.is_err());
    }

    #[test]
    fn service_side_quota_maps_to_quota_error() {
        let err: ReportError = GenerationError::QuotaExceeded { current: None }.into();
        assert_eq!(err, ReportError::quota_exceeded(5));
    }

    #[test]
    fn timeout_maps_to_network_error() {
        let err: ReportError = GenerationError::Timeout(30).into();
        assert!(matches!(err, ReportError::Network(_)));
    }

    #[test]
    fn failure_maps_to_generation_failed() {
        let err: ReportError = GenerationError::failed("model refused").into();
        assert_eq!(err, ReportError::GenerationFailed("model refused".to_string()));
    }
}
