//! RenderReportHandler - Query handler that turns a report body into
//! structured blocks and presentation nodes.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::document::{parse, render, Block, PresentationNode};
use crate::domain::foundation::ReportId;
use crate::domain::report::{Report, ReportError};
use crate::ports::ReportRepository;

/// Query to render a report's document.
#[derive(Debug, Clone)]
pub struct RenderReportQuery {
    pub report_id: ReportId,
}

/// A report together with its parsed and rendered body.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedReport {
    #[serde(skip)]
    pub report: Report,
    pub blocks: Vec<Block>,
    pub nodes: Vec<PresentationNode>,
}

/// Handler for rendering report documents.
pub struct RenderReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl RenderReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: RenderReportQuery) -> Result<RenderedReport, ReportError> {
        let report = self
            .repository
            .find_by_id(&query.report_id)
            .await?
            .ok_or_else(|| ReportError::not_found(query.report_id.clone()))?;

        let blocks = parse(report.raw_content());
        let nodes = render(&blocks);

        Ok(RenderedReport {
            report,
            blocks,
            nodes,
        })
    }
}
