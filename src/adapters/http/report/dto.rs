//! HTTP DTOs for report endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::RenderedReport;
use crate::domain::document::{to_html, Block, PresentationNode};
use crate::domain::foundation::Timestamp;
use crate::domain::report::{
    GenerationMetadata, Report, ReportContent, ReportError, ReportStatus, ReportType,
};
use crate::ports::{Pagination, ReportPage};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body for POST /api/projects/:project_id/reports.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReportRequest {
    #[serde(default, alias = "reportType")]
    pub report_type: ReportType,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for listing reports.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListReportsParams {
    pub report_type: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Query parameters for exporting a report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportParams {
    pub project_name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct PeriodResponse {
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Full report view.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub project_id: String,
    pub report_type: ReportType,
    pub report_type_label: &'static str,
    pub status: ReportStatus,
    pub period: PeriodResponse,
    pub generated_at: Option<Timestamp>,
    pub content: Option<ReportContent>,
    pub metadata: Option<GenerationMetadata>,
    pub created_at: Timestamp,
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id().to_string(),
            project_id: report.project_id().to_string(),
            report_type: report.report_type(),
            report_type_label: report.report_type().display_name(),
            status: report.status(),
            period: PeriodResponse {
                start_date: *report.period().start_date(),
                end_date: *report.period().end_date(),
            },
            generated_at: report.generated_at().copied(),
            content: report.content().cloned(),
            metadata: report.metadata().cloned(),
            created_at: *report.created_at(),
        }
    }
}

/// Response for the report list.
#[derive(Debug, Clone, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportResponse>,
    pub pagination: Pagination,
}

impl From<ReportPage> for ReportListResponse {
    fn from(page: ReportPage) -> Self {
        Self {
            reports: page.reports.iter().map(ReportResponse::from).collect(),
            pagination: page.pagination,
        }
    }
}

/// Structured and rendered view of a report body.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub report_id: String,
    pub blocks: Vec<Block>,
    pub nodes: Vec<PresentationNode>,
    /// HTML preview of `nodes`.
    pub html: String,
}

impl From<RenderedReport> for DocumentResponse {
    fn from(rendered: RenderedReport) -> Self {
        let html = to_html(&rendered.nodes);
        Self {
            report_id: rendered.report.id().to_string(),
            blocks: rendered.blocks,
            nodes: rendered.nodes,
            html,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&ReportError> for ErrorResponse {
    fn from(error: &ReportError) -> Self {
        let domain = error.to_domain_error();
        let mut details: serde_json::Map<String, serde_json::Value> = domain
            .details
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        if error.redirects_to_list() {
            details.insert("redirect".to_string(), serde_json::Value::String("list".to_string()));
        }
        Self {
            code: domain.code.to_string(),
            message: domain.message,
            details: (!details.is_empty()).then(|| serde_json::Value::Object(details)),
        }
    }
}
