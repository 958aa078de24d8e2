//! ListReportsHandler - Query handler for a project's reports.

use std::sync::Arc;

use crate::domain::foundation::ProjectId;
use crate::domain::report::{ReportError, ReportType};
use crate::ports::{ReportFilter, ReportPage, ReportRepository};

/// Query to list a project's reports.
#[derive(Debug, Clone, Default)]
pub struct ListReportsQuery {
    pub project_id: String,
    pub report_type: Option<ReportType>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Handler for listing reports.
///
/// The store is authoritative; the page it returns replaces whatever the
/// caller held before.
pub struct ListReportsHandler {
    repository: Arc<dyn ReportRepository>,
}

impl ListReportsHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListReportsQuery) -> Result<ReportPage, ReportError> {
        let project_id = ProjectId::new(query.project_id)?;
        let filter = ReportFilter::new(query.report_type, query.page, query.limit);

        let page = self.repository.list_by_project(&project_id, &filter).await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryReportRepository;
    use crate::domain::foundation::{ReportId, Timestamp};
    use crate::domain::report::{Report, ReportPeriod};

    async fn seeded() -> Arc<InMemoryReportRepository> {
        let repo = Arc::new(InMemoryReportRepository::new());
        for (project, report_type) in [
            ("p1", ReportType::Executive),
            ("p1", ReportType::Technical),
            ("p1", ReportType::Executive),
            ("p2", ReportType::Dashboard),
        ] {
            let report = Report::pending(
                ReportId::new(),
                ProjectId::new(project).unwrap(),
                report_type,
                ReportPeriod::trailing(Timestamp::now(), 30),
            );
            repo.save(&report).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn lists_only_the_projects_reports() {
        let handler = ListReportsHandler::new(seeded().await);
        let page = handler
            .handle(ListReportsQuery {
                project_id: "p1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.reports.len(), 3);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.current, 1);
        assert_eq!(page.pagination.pages, 1);
    }

    #[tokio::test]
    async fn filters_by_report_type() {
        let handler = ListReportsHandler::new(seeded().await);
        let page = handler
            .handle(ListReportsQuery {
                project_id: "p1".to_string(),
                report_type: Some(ReportType::Technical),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.reports.len(), 1);
        assert_eq!(page.reports[0].report_type(), ReportType::Technical);
    }

    #[tokio::test]
    async fn empty_project_lists_nothing() {
        let handler = ListReportsHandler::new(seeded().await);
        let page = handler
            .handle(ListReportsQuery {
                project_id: "p9".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(page.reports.is_empty());
        assert_eq!(page.pagination.pages, 0);
    }

    #[tokio::test]
    async fn blank_project_is_rejected() {
        let handler = ListReportsHandler::new(seeded().await);
        let err = handler.handle(ListReportsQuery::default()).await.unwrap_err();
        assert!(matches!(err, ReportError::ValidationFailed { .. }));
    }
}
