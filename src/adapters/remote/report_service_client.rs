//! Remote Report Service - HTTP client for the external report service.
//!
//! Implements both `ReportGenerator` and `ReportRepository`: the service
//! writes report content and is also the authoritative store.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RemoteReportServiceConfig::new("https://reports.internal")
//!     .with_api_key("secret")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let service = RemoteReportService::new(config)?;
//! ```
//!
//! # Quota rejections
//!
//! The service may enforce the report ceiling itself. A structured
//! `QUOTA_EXCEEDED` code is preferred; older deployments only send the
//! message text, so an error containing the legacy quota message is mapped
//! the same way.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, ReportId};
use crate::domain::report::{is_legacy_quota_message, Report};
use crate::ports::{
    GenerationError, GenerationRequest, Pagination, ReportFilter, ReportGenerator, ReportPage,
    ReportRepository,
};

use super::wire::{GenerateBody, ReportEnvelope, ReportListEnvelope, StatusEnvelope, WireReport};

/// Configuration for the remote report service.
#[derive(Debug, Clone)]
pub struct RemoteReportServiceConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Bearer token, if the service requires one.
    api_key: Option<Secret<String>>,
    /// Request timeout. Generation can take a while.
    pub timeout: Duration,
}

impl RemoteReportServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_secret_api_key(mut self, api_key: Option<Secret<String>>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error building the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("Failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid report service URL: {0}")]
    InvalidBaseUrl(String),
}

/// HTTP adapter for the remote report service.
#[derive(Debug, Clone)]
pub struct RemoteReportService {
    config: RemoteReportServiceConfig,
    base_url: Url,
    client: Client,
}

impl RemoteReportService {
    pub fn new(config: RemoteReportServiceConfig) -> Result<Self, ClientBuildError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientBuildError::InvalidBaseUrl(config.base_url.clone()))?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    /// Ids are opaque, so a `/` or `?` inside one must not change the route.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder.bearer_auth(key.expose_secret()),
            None => builder,
        }
    }

    /// Sends a request, mapping transport failures to `DomainError`.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, DomainError> {
        self.authorized(builder).send().await.map_err(|e| {
            warn!(error = %e, "Report service request failed");
            DomainError::new(ErrorCode::NetworkError, transport_message(&e, self.config.timeout))
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<(StatusCode, T), DomainError> {
        let status = response.status();
        let body = response.json::<T>().await.map_err(|e| {
            DomainError::new(
                ErrorCode::NetworkError,
                format!("Unexpected response from report service ({}): {}", status, e),
            )
        })?;
        Ok((status, body))
    }

    /// Fetches one page of reports.
    async fn fetch_page(
        &self,
        project_id: &ProjectId,
        filter: &ReportFilter,
    ) -> Result<ReportPage, DomainError> {
        let mut query: Vec<(&str, String)> = vec![
            ("projectId", project_id.to_string()),
            ("page", filter.page.to_string()),
            ("limit", filter.limit.to_string()),
        ];
        if let Some(report_type) = filter.report_type {
            query.push(("reportType", report_type.as_str().to_string()));
        }

        let response = self
            .send(self.client.get(self.url(&["reports"])).query(&query))
            .await?;
        let (status, envelope) = Self::decode::<ReportListEnvelope>(response).await?;
        if !status.is_success() || !envelope.success {
            return Err(service_error(status, envelope.error, envelope.code));
        }

        let total_on_page = envelope.reports.len() as u32;
        let reports = convert_all(envelope.reports)?;
        let pagination = envelope
            .pagination
            .unwrap_or_else(|| Pagination::new(filter.page, filter.limit, total_on_page));

        Ok(ReportPage {
            reports,
            pagination,
        })
    }
}

#[async_trait]
impl ReportGenerator for RemoteReportService {
    async fn generate(&self, request: &GenerationRequest) -> Result<Report, GenerationError> {
        let body = GenerateBody {
            report_type: request.report_type,
            start_date: request.start_date,
            end_date: request.end_date,
        };
        let url = self.url(&["reports", "generate", request.project_id.as_str()]);

        let response = self
            .authorized(self.client.post(url).json(&body))
            .send()
            .await
            .map_err(|e| {
                warn!(project_id = %request.project_id, error = %e, "Report generation request failed");
                if e.is_timeout() {
                    GenerationError::Timeout(self.config.timeout.as_secs())
                } else {
                    GenerationError::network(transport_message(&e, self.config.timeout))
                }
            })?;

        let status = response.status();
        let envelope: ReportEnvelope = response.json().await.map_err(|e| {
            GenerationError::failed(format!(
                "Unexpected response from report service ({}): {}",
                status, e
            ))
        })?;

        if let Some(failure) = generation_failure(&envelope) {
            return Err(failure);
        }

        let report = envelope
            .report
            .ok_or_else(|| GenerationError::failed("Report service returned no report"))?
            .into_report()
            .map_err(|e| GenerationError::failed(format!("Malformed report: {}", e)))?;

        debug!(report_id = %report.id(), status = report.status().as_str(), "Report service generated report");
        Ok(report)
    }
}

#[async_trait]
impl ReportRepository for RemoteReportService {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        // The service stores reports as part of generation.
        debug!(report_id = %report.id(), "Report already persisted by report service");
        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError> {
        let response = self
            .send(self.client.get(self.url(&["reports", id.as_str()])))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let (status, envelope) = Self::decode::<ReportEnvelope>(response).await?;
        if !status.is_success() || !envelope.success {
            return Err(service_error(status, envelope.error, envelope.code));
        }

        envelope
            .report
            .map(convert)
            .transpose()
    }

    async fn list_by_project(
        &self,
        project_id: &ProjectId,
        filter: &ReportFilter,
    ) -> Result<ReportPage, DomainError> {
        self.fetch_page(project_id, filter).await
    }

    async fn count_by_project(&self, project_id: &ProjectId) -> Result<u32, DomainError> {
        let filter = ReportFilter::new(None, Some(1), Some(ReportFilter::MAX_LIMIT));
        let page = self.fetch_page(project_id, &filter).await?;
        Ok(page.pagination.total.max(page.reports.len() as u32))
    }

    async fn delete(&self, id: &ReportId) -> Result<(), DomainError> {
        let response = self
            .send(self.client.delete(self.url(&["reports", id.as_str()])))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(not_found(id));
        }

        let (status, envelope) = Self::decode::<StatusEnvelope>(response).await?;
        if !status.is_success() || !envelope.success {
            let err = service_error(status, envelope.error, envelope.code);
            if err.code == ErrorCode::ReportNotFound {
                return Err(not_found(id));
            }
            return Err(err);
        }
        Ok(())
    }
}

fn transport_message(e: &reqwest::Error, timeout: Duration) -> String {
    if e.is_timeout() {
        format!("Request timed out after {} seconds", timeout.as_secs())
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    }
}

fn convert(wire: WireReport) -> Result<Report, DomainError> {
    wire.into_report().map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Malformed report from report service: {}", e),
        )
    })
}

fn convert_all(wire: Vec<WireReport>) -> Result<Vec<Report>, DomainError> {
    wire.into_iter().map(convert).collect()
}

fn not_found(id: &ReportId) -> DomainError {
    DomainError::new(ErrorCode::ReportNotFound, format!("Report not found: {}", id))
        .with_detail("report_id", id.to_string())
}

fn is_quota_rejection(error: Option<&str>, code: Option<&str>) -> bool {
    code == Some("QUOTA_EXCEEDED") || error.map(is_legacy_quota_message).unwrap_or(false)
}

/// Maps an unsuccessful envelope to a `DomainError`.
fn service_error(status: StatusCode, error: Option<String>, code: Option<String>) -> DomainError {
    let message = error.unwrap_or_else(|| format!("Report service returned {}", status));
    let code = if is_quota_rejection(Some(&message), code.as_deref()) {
        ErrorCode::QuotaExceeded
    } else {
        code.as_deref()
            .and_then(ErrorCode::from_wire)
            .unwrap_or(if status == StatusCode::NOT_FOUND {
                ErrorCode::ReportNotFound
            } else {
                ErrorCode::InternalError
            })
    };
    DomainError::new(code, message)
}

/// Classifies a generation envelope that did not succeed.
fn generation_failure(envelope: &ReportEnvelope) -> Option<GenerationError> {
    if envelope.success && envelope.error.is_none() {
        return None;
    }
    if is_quota_rejection(envelope.error.as_deref(), envelope.code.as_deref()) {
        return Some(GenerationError::QuotaExceeded { current: None });
    }
    Some(GenerationError::failed(
        envelope
            .error
            .clone()
            .unwrap_or_else(|| "Report service reported failure".to_string()),
    ))
}
