//! Report repository port.
//!
//! Defines the contract for the store that owns generated reports. The store
//! is authoritative for listing and counting; callers never merge results.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId, ReportId};
use crate::domain::report::{Report, ReportType};

/// Repository port for Report persistence.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Save a newly generated report.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, report: &Report) -> Result<(), DomainError>;

    /// Find a report by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError>;

    /// List a project's reports, newest first.
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
        filter: &ReportFilter,
    ) -> Result<ReportPage, DomainError>;

    /// Count live (non-deleted) reports for a project.
    async fn count_by_project(&self, project_id: &ProjectId) -> Result<u32, DomainError>;

    /// Delete a report.
    ///
    /// # Errors
    ///
    /// - `ReportNotFound` if the report doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ReportId) -> Result<(), DomainError>;
}

/// Filter and paging options for listing reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub report_type: Option<ReportType>,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl ReportFilter {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 50;

    /// Builds a filter, clamping page and limit into range.
    pub fn new(report_type: Option<ReportType>, page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            report_type,
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.limit as usize
    }

    pub fn matches(&self, report: &Report) -> bool {
        self.report_type
            .map(|t| t == report.report_type())
            .unwrap_or(true)
    }
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// Paging summary returned alongside a page of reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub pages: u32,
    pub total: u32,
}

impl Pagination {
    pub fn new(current: u32, limit: u32, total: u32) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit)
        };
        Self {
            current,
            pages,
            total,
        }
    }
}

/// One page of reports.
#[derive(Debug, Clone, Default)]
pub struct ReportPage {
    pub reports: Vec<Report>,
    pub pagination: Pagination,
}
