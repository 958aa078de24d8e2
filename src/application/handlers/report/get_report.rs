//! GetReportHandler - Query handler for retrieving a single report.

use std::sync::Arc;

use crate::domain::foundation::ReportId;
use crate::domain::report::{Report, ReportError};
use crate::ports::ReportRepository;

/// Query to get a report by ID.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub report_id: ReportId,
}

/// Handler for retrieving report details.
pub struct GetReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl GetReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<Report, ReportError> {
        self.repository
            .find_by_id(&query.report_id)
            .await?
            .ok_or_else(|| ReportError::not_found(query.report_id.clone()))
    }
}
