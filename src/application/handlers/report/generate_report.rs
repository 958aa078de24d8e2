//! GenerateReportHandler - Command handler for generating a new report.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{ProjectId, Timestamp};
use crate::domain::report::{Report, ReportError, ReportType};
use crate::ports::{GenerationRequest, QuotaChecker, ReportGenerator, ReportRepository};

/// Command to generate a report for a project.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub project_id: String,
    pub report_type: ReportType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl GenerateReportCommand {
    pub fn new(project_id: impl Into<String>, report_type: ReportType) -> Self {
        Self {
            project_id: project_id.into(),
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
}

/// Handler for generating reports.
pub struct GenerateReportHandler {
    quota: Arc<dyn QuotaChecker>,
    generator: Arc<dyn ReportGenerator>,
    repository: Arc<dyn ReportRepository>,
}

impl GenerateReportHandler {
    pub fn new(
        quota: Arc<dyn QuotaChecker>,
        generator: Arc<dyn ReportGenerator>,
        repository: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            quota,
            generator,
            repository,
        }
    }

    pub async fn handle(&self, cmd: GenerateReportCommand) -> Result<Report, ReportError> {
        // 1. Validate input and pin the reporting window
        let project_id = ProjectId::new(cmd.project_id)?;
        let period = GenerationRequest::new(project_id.clone(), cmd.report_type)
            .with_window(cmd.start_date, cmd.end_date)
            .resolve_period(Timestamp::now().date())?;

        // 2. Enforce the per-project ceiling
        if let Err(err) = self.quota.check_or_fail(&project_id).await {
            warn!(project_id = %project_id, error = %err, "Report generation rejected");
            return Err(err);
        }

        // 3. Delegate synthesis
        let request = GenerationRequest::new(project_id.clone(), cmd.report_type).with_window(
            Some(period.start_date().date()),
            Some(period.end_date().date()),
        );
        let report = self.generator.generate(&request).await.map_err(|err| {
            warn!(project_id = %project_id, error = %err, "Report generator failed");
            ReportError::from(err)
        })?;

        // 4. Persist whatever came back, failed reports included
        self.repository.save(&report).await?;

        info!(
            report_id = %report.id(),
            project_id = %project_id,
            report_type = %report.report_type(),
            status = report.status().as_str(),
            "Report generated"
        );

        Ok(report)
    }
}
