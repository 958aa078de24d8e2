//! DeleteReportHandler - Command handler for deleting a report.
//!
//! Deletion is the only way a project gets quota back.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{ErrorCode, ReportId};
use crate::domain::report::ReportError;
use crate::ports::ReportRepository;

/// Command to delete a report.
#[derive(Debug, Clone)]
pub struct DeleteReportCommand {
    pub report_id: ReportId,
}

/// Handler for deleting reports.
pub struct DeleteReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl DeleteReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteReportCommand) -> Result<(), ReportError> {
        self.repository
            .delete(&cmd.report_id)
            .await
            .map_err(|err| match err.code {
                ErrorCode::ReportNotFound => ReportError::not_found(cmd.report_id.clone()),
                _ => ReportError::from(err),
            })?;

        info!(report_id = %cmd.report_id, "Report deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::quota::ReportQuotaManager;
    use crate::adapters::storage::InMemoryReportRepository;
    use crate::domain::foundation::{ProjectId, Timestamp};
    use crate::domain::report::{Report, ReportPeriod, ReportType};
    use crate::ports::QuotaChecker;

    async fn full_project(repo: &InMemoryReportRepository) -> Vec<ReportId> {
        let mut ids = Vec::new();
        for _ in 0..5 {
            let report = Report::pending(
                ReportId::new(),
                ProjectId::new("p1").unwrap(),
                ReportType::Executive,
                ReportPeriod::trailing(Timestamp::now(), 30),
            );
            repo.save(&report).await.unwrap();
            ids.push(report.id().clone());
        }
        ids
    }

    #[tokio::test]
    async fn deletes_existing_report() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let ids = full_project(&repo).await;
        let handler = DeleteReportHandler::new(repo.clone());

        handler
            .handle(DeleteReportCommand { report_id: ids[0].clone() })
            .await
            .unwrap();

        assert_eq!(repo.find_by_id(&ids[0]).await.unwrap(), None);
        assert_eq!(repo.len().await, 4);
    }

    #[tokio::test]
    async fn delete_releases_quota() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let ids = full_project(&repo).await;
        let quota = ReportQuotaManager::new(repo.clone());
        let project = ProjectId::new("p1").unwrap();
        assert!(!quota.can_generate(&project).await.unwrap());

        DeleteReportHandler::new(repo.clone())
            .handle(DeleteReportCommand { report_id: ids[2].clone() })
            .await
            .unwrap();

        assert!(quota.can_generate(&project).await.unwrap());
    }

    #[tokio::test]
    async fn missing_report_is_not_found() {
        let handler = DeleteReportHandler::new(Arc::new(InMemoryReportRepository::new()));
        let id = ReportId::new();

        let err = handler
            .handle(DeleteReportCommand { report_id: id.clone() })
            .await
            .unwrap_err();
        assert_eq!(err, ReportError::NotFound(id));
    }
}
