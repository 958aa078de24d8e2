//! JSON shapes spoken by the remote report service.
//!
//! Every response is wrapped in `{success, ..., error?, code?}`. Field names
//! are camelCase on the wire.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ProjectId, ReportId, Timestamp, ValidationError};
use crate::domain::report::{
    GenerationMetadata, Report, ReportContent, ReportMetrics, ReportParts, ReportPeriod,
    ReportStatus, ReportType,
};
use crate::ports::Pagination;

/// Body of `POST /reports/generate/{projectId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    pub report_type: ReportType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Envelope carrying one report.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportEnvelope {
    #[serde(default)]
    pub success: bool,
    pub report: Option<WireReport>,
    pub error: Option<String>,
    pub code: Option<String>,
}

/// Envelope carrying a page of reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportListEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reports: Vec<WireReport>,
    pub pagination: Option<Pagination>,
    pub error: Option<String>,
    pub code: Option<String>,
}

/// Envelope with no payload (deletes).
#[derive(Debug, Clone, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePeriod {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireMetrics {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub completion_rate: Percentage,
    pub project_health: Percentage,
    pub team_utilization: Percentage,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireContent {
    #[serde(default)]
    pub raw_content: String,
    #[serde(default)]
    pub metrics: WireMetrics,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireMetadata {
    /// Milliseconds.
    pub generation_time: u64,
    pub data_points: u32,
    pub llm_model: String,
}

/// A report as the remote service serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReport {
    #[serde(alias = "_id")]
    pub id: ReportId,
    pub project_id: String,
    pub report_type: ReportType,
    pub status: ReportStatus,
    #[serde(alias = "reportPeriod")]
    pub period: WirePeriod,
    pub generated_at: Option<DateTime<Utc>>,
    pub content: Option<WireContent>,
    pub metadata: Option<WireMetadata>,
    pub created_at: Option<DateTime<Utc>>,
}

impl WireReport {
    /// Converts into the domain aggregate, re-checking its invariants.
    pub fn into_report(self) -> Result<Report, ValidationError> {
        let period = ReportPeriod::new(
            Timestamp::from_datetime(self.period.start_date),
            Timestamp::from_datetime(self.period.end_date),
        )?;
        let content = self.content.map(|c| ReportContent {
            raw_content: c.raw_content,
            metrics: ReportMetrics {
                total_tasks: c.metrics.total_tasks,
                completed_tasks: c.metrics.completed_tasks,
                completion_rate: c.metrics.completion_rate,
                project_health: c.metrics.project_health,
                team_utilization: c.metrics.team_utilization,
            },
            insights: c.insights,
            recommendations: c.recommendations,
        });
        let metadata = self.metadata.map(|m| GenerationMetadata {
            generation_time_ms: m.generation_time,
            data_points: m.data_points,
            llm_model: m.llm_model,
        });
        let generated_at = self.generated_at.map(Timestamp::from_datetime);
        let created_at = self
            .created_at
            .map(Timestamp::from_datetime)
            .or(generated_at)
            .unwrap_or_else(Timestamp::now);

        Report::from_parts(ReportParts {
            id: self.id,
            project_id: ProjectId::new(self.project_id)?,
            report_type: self.report_type,
            status: self.status,
            period,
            generated_at,
            content,
            metadata,
            created_at,
        })
    }
}
