//! Report aggregate.
//!
//! A report is created pending, then moves once to `completed` or `failed`.
//! Completed reports are immutable; the only remaining operation is deletion,
//! which happens at the repository.

use crate::domain::foundation::{ProjectId, ReportId, StateMachine, Timestamp, ValidationError};

use super::values::{GenerationMetadata, ReportContent, ReportPeriod, ReportStatus, ReportType};

/// A generated progress report for one project and one period.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    id: ReportId,
    project_id: ProjectId,
    report_type: ReportType,
    status: ReportStatus,
    period: ReportPeriod,
    generated_at: Option<Timestamp>,
    content: Option<ReportContent>,
    metadata: Option<GenerationMetadata>,
    created_at: Timestamp,
}

/// Plain field bag used by adapters to rebuild a stored report.
#[derive(Debug, Clone)]
pub struct ReportParts {
    pub id: ReportId,
    pub project_id: ProjectId,
    pub report_type: ReportType,
    pub status: ReportStatus,
    pub period: ReportPeriod,
    pub generated_at: Option<Timestamp>,
    pub content: Option<ReportContent>,
    pub metadata: Option<GenerationMetadata>,
    pub created_at: Timestamp,
}

impl Report {
    /// Creates a report awaiting generation.
    pub fn pending(
        id: ReportId,
        project_id: ProjectId,
        report_type: ReportType,
        period: ReportPeriod,
    ) -> Self {
        Self {
            id,
            project_id,
            report_type,
            status: ReportStatus::Pending,
            period,
            generated_at: None,
            content: None,
            metadata: None,
            created_at: Timestamp::now(),
        }
    }

    /// Rebuilds a report from stored fields, re-checking its invariants.
    pub fn from_parts(parts: ReportParts) -> Result<Self, ValidationError> {
        if let Some(content) = &parts.content {
            content.metrics.validate()?;
        }
        if parts.status == ReportStatus::Completed {
            if parts.content.is_none() {
                return Err(ValidationError::empty_field("content"));
            }
            if parts.generated_at.is_none() {
                return Err(ValidationError::empty_field("generated_at"));
            }
        }
        Ok(Self {
            id: parts.id,
            project_id: parts.project_id,
            report_type: parts.report_type,
            status: parts.status,
            period: parts.period,
            generated_at: parts.generated_at,
            content: parts.content,
            metadata: parts.metadata,
            created_at: parts.created_at,
        })
    }

    /// Records successful generation.
    pub fn complete(
        &mut self,
        content: ReportContent,
        metadata: GenerationMetadata,
        generated_at: Timestamp,
    ) -> Result<(), ValidationError> {
        content.metrics.validate()?;
        self.status = self.status.transition_to(ReportStatus::Completed)?;
        self.content = Some(content);
        self.metadata = Some(metadata);
        self.generated_at = Some(generated_at);
        Ok(())
    }

    /// Records a failed generation. Partial content, if any, is kept for display.
    pub fn fail(&mut self, partial: Option<ReportContent>) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(ReportStatus::Failed)?;
        if partial.is_some() {
            self.content = partial;
        }
        Ok(())
    }

    pub fn id(&self) -> &ReportId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn period(&self) -> &ReportPeriod {
        &self.period
    }

    pub fn generated_at(&self) -> Option<&Timestamp> {
        self.generated_at.as_ref()
    }

    pub fn content(&self) -> Option<&ReportContent> {
        self.content.as_ref()
    }

    pub fn metadata(&self) -> Option<&GenerationMetadata> {
        self.metadata.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// The raw document text, empty until content exists.
    pub fn raw_content(&self) -> &str {
        self.content
            .as_ref()
            .map(|c| c.raw_content.as_str())
            .unwrap_or("")
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReportStatus::Completed
    }
}
