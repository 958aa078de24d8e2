//! Quota port for report generation.
//!
//! The check is check-then-act against the store: two concurrent
//! generations for one project can both pass. It is a guard for the user,
//! not a transactional guarantee.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::report::ReportError;

/// Port for checking a project's remaining report capacity.
#[async_trait]
pub trait QuotaChecker: Send + Sync {
    /// Current usage against the ceiling.
    async fn usage(&self, project_id: &ProjectId) -> Result<QuotaUsage, DomainError>;

    /// True while the project is below the ceiling.
    async fn can_generate(&self, project_id: &ProjectId) -> Result<bool, DomainError> {
        Ok(self.usage(project_id).await?.has_capacity())
    }

    /// Fails with `QuotaExceeded` once the ceiling is reached.
    async fn check_or_fail(&self, project_id: &ProjectId) -> Result<QuotaUsage, ReportError> {
        let usage = self.usage(project_id).await?;
        if usage.has_capacity() {
            Ok(usage)
        } else {
            Err(ReportError::QuotaExceeded {
                limit: usage.limit,
                current: usage.current,
            })
        }
    }
}

/// Reports held by a project versus the allowed maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaUsage {
    pub current: u32,
    pub limit: u32,
}

impl QuotaUsage {
    pub fn new(current: u32, limit: u32) -> Self {
        Self { current, limit }
    }

    pub fn has_capacity(&self) -> bool {
        self.current < self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.current)
    }
}
