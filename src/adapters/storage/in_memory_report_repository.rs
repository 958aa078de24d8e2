//! In-Memory Report Repository Adapter
//!
//! Keeps reports in a process-local map. Used for tests and for local
//! development when no remote report service is configured.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, ReportId};
use crate::domain::report::Report;
use crate::ports::{Pagination, ReportFilter, ReportPage, ReportRepository};

/// In-memory storage for reports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportRepository {
    reports: Arc<RwLock<HashMap<ReportId, Report>>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reports across all projects.
    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        let mut reports = self.reports.write().await;
        reports.insert(report.id().clone(), report.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError> {
        Ok(self.reports.read().await.get(id).cloned())
    }

    async fn list_by_project(
        &self,
        project_id: &ProjectId,
        filter: &ReportFilter,
    ) -> Result<ReportPage, DomainError> {
        let reports = self.reports.read().await;
        let mut matching: Vec<&Report> = reports
            .values()
            .filter(|r| r.project_id() == project_id && filter.matches(r))
            .collect();
        matching.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| b.id().as_str().cmp(a.id().as_str()))
        });

        let total = matching.len() as u32;
        let page = matching
            .into_iter()
            .skip(filter.offset())
            .take(filter.limit as usize)
            .cloned()
            .collect();

        Ok(ReportPage {
            reports: page,
            pagination: Pagination::new(filter.page, filter.limit, total),
        })
    }

    async fn count_by_project(&self, project_id: &ProjectId) -> Result<u32, DomainError> {
        let reports = self.reports.read().await;
        Ok(reports
            .values()
            .filter(|r| r.project_id() == project_id)
            .count() as u32)
    }

    async fn delete(&self, id: &ReportId) -> Result<(), DomainError> {
        let mut reports = self.reports.write().await;
        match reports.remove(id) {
            Some(_) => Ok(()),
            None => Err(DomainError::new(
                ErrorCode::ReportNotFound,
                format!("Report not found: {}", id),
            )
            .with_detail("report_id", id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{ReportPeriod, ReportType};
    use crate::domain::foundation::Timestamp;

    fn project(id: &str) -> ProjectId {
        ProjectId::new(id).unwrap()
    }

    fn report(project_id: &str, report_type: ReportType) -> Report {
        Report::pending(
            ReportId::new(),
            project(project_id),
            report_type,
            ReportPeriod::trailing(Timestamp::now(), ReportPeriod::DEFAULT_DAYS),
        )
    }

    #[tokio::test]
    async fn saves_and_finds_report() {
        let repo = InMemoryReportRepository::new();
        let r = report("p1", ReportType::Executive);
        repo.save(&r).await.unwrap();

        assert_eq!(repo.find_by_id(r.id()).await.unwrap(), Some(r));
        assert_eq!(repo.find_by_id(&ReportId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn counts_only_the_given_project() {
        let repo = InMemoryReportRepository::new();
        repo.save(&report("p1", ReportType::Executive)).await.unwrap();
        repo.save(&report("p1", ReportType::Detailed)).await.unwrap();
        repo.save(&report("p2", ReportType::Executive)).await.unwrap();

        assert_eq!(repo.count_by_project(&project("p1")).await.unwrap(), 2);
        assert_eq!(repo.count_by_project(&project("p2")).await.unwrap(), 1);
        assert_eq!(repo.count_by_project(&project("p3")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_filters_by_type_and_paginates() {
        let repo = InMemoryReportRepository::new();
        for _ in 0..3 {
            repo.save(&report("p1", ReportType::Executive)).await.unwrap();
        }
        repo.save(&report("p1", ReportType::Technical)).await.unwrap();

        let filter = ReportFilter::new(Some(ReportType::Executive), Some(2), Some(2));
        let page = repo.list_by_project(&project("p1"), &filter).await.unwrap();

        assert_eq!(page.reports.len(), 1);
        assert_eq!(
            page.pagination,
            Pagination {
                current: 2,
                pages: 2,
                total: 3
            }
        );
        assert!(page
            .reports
            .iter()
            .all(|r| r.report_type() == ReportType::Executive));
    }

    #[tokio::test]
    async fn delete_removes_report() {
        let repo = InMemoryReportRepository::new();
        let r = report("p1", ReportType::Executive);
        repo.save(&r).await.unwrap();

        repo.delete(r.id()).await.unwrap();
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn delete_missing_report_is_not_found() {
        let repo = InMemoryReportRepository::new();
        let err = repo.delete(&ReportId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportNotFound);
    }
}
