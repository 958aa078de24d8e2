//! Repository-backed report quota.
//!
//! Counts a project's live reports through the `ReportRepository` and compares
//! against the configured ceiling. Deleting a report frees a slot because the
//! count is taken fresh on every check.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::report::MAX_REPORTS_PER_PROJECT;
use crate::ports::{QuotaChecker, QuotaUsage, ReportRepository};

/// QuotaChecker that asks the report store how many reports a project holds.
#[derive(Clone)]
pub struct ReportQuotaManager {
    repository: Arc<dyn ReportRepository>,
    limit: u32,
}

impl ReportQuotaManager {
    /// Creates a manager with the standard per-project ceiling.
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self::with_limit(repository, MAX_REPORTS_PER_PROJECT)
    }

    pub fn with_limit(repository: Arc<dyn ReportRepository>, limit: u32) -> Self {
        Self { repository, limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[async_trait]
impl QuotaChecker for ReportQuotaManager {
    async fn usage(&self, project_id: &ProjectId) -> Result<QuotaUsage, DomainError> {
        let current = self.repository.count_by_project(project_id).await?;
        debug!(
            project_id = %project_id,
            current,
            limit = self.limit,
            "Checked report quota"
        );
        Ok(QuotaUsage::new(current, self.limit))
    }
}
