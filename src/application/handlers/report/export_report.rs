//! ExportReportHandler - Builds a printable document for a report and hands
//! it to the configured `DocumentSink`.

use std::sync::Arc;
use tracing::info;

use crate::domain::document::{printable_base_filename, to_printable_document};
use crate::domain::foundation::ReportId;
use crate::domain::report::ReportError;
use crate::ports::{DocumentSink, ExportedFile, PrintableDocument, ReportRepository};

/// Command to export a report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub report_id: ReportId,
    /// Display name for the title block. Falls back to the project ID.
    pub project_name: Option<String>,
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub document: PrintableDocument,
    pub file: ExportedFile,
}

/// Handler for exporting reports.
pub struct ExportReportHandler {
    repository: Arc<dyn ReportRepository>,
    sink: Arc<dyn DocumentSink>,
}

impl ExportReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>, sink: Arc<dyn DocumentSink>) -> Self {
        Self { repository, sink }
    }

    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportReportResult, ReportError> {
        let report = self
            .repository
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or_else(|| ReportError::not_found(cmd.report_id.clone()))?;

        let project_name = cmd
            .project_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| report.project_id().as_str())
            .to_string();

        let document = PrintableDocument::html(
            to_printable_document(&report, &project_name),
            printable_base_filename(&report, &project_name),
        );
        let file = self.sink.write(&document).await?;

        info!(
            report_id = %cmd.report_id,
            path = %file.path.display(),
            size_bytes = file.size_bytes,
            "Report exported"
        );

        Ok(ExportReportResult { document, file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryReportRepository;
    use crate::domain::foundation::{ProjectId, Timestamp};
    use crate::domain::report::{Report, ReportPeriod, ReportType};
    use crate::ports::ExportError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct MockDocumentSink {
        written: Mutex<Vec<PrintableDocument>>,
        fail: bool,
    }

    impl MockDocumentSink {
        fn new() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn written(&self) -> Vec<PrintableDocument> {
            self.written.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentSink for MockDocumentSink {
        async fn write(&self, document: &PrintableDocument) -> Result<ExportedFile, ExportError> {
            if self.fail {
                return Err(ExportError::io_error("disk full"));
            }
            self.written.lock().unwrap().push(document.clone());
            Ok(ExportedFile {
                path: PathBuf::from("/tmp").join(document.filename()),
                filename: document.filename(),
                content_type: document.content_type().to_string(),
                size_bytes: document.content.len() as u64,
                checksum: "abc".to_string(),
            })
        }
    }

    async fn stored_report() -> (Arc<InMemoryReportRepository>, ReportId) {
        let repo = Arc::new(InMemoryReportRepository::new());
        let report = Report::pending(
            ReportId::new(),
            ProjectId::new("proj-apollo").unwrap(),
            ReportType::Technical,
            ReportPeriod::trailing(Timestamp::now(), 30),
        );
        repo.save(&report).await.unwrap();
        (repo, report.id().clone())
    }

    #[tokio::test]
    async fn writes_printable_document_to_sink() {
        let (repo, id) = stored_report().await;
        let sink = Arc::new(MockDocumentSink::new());
        let handler = ExportReportHandler::new(repo, sink.clone());

        let result = handler
            .handle(ExportReportCommand {
                report_id: id.clone(),
                project_name: Some("Apollo".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(sink.written(), vec![result.document.clone()]);
        assert!(result.document.content.contains("<h1>Apollo</h1>"));
        assert!(result.file.filename.starts_with("apollo-technical-"));
        assert!(result.file.filename.ends_with(".html"));
    }

    #[tokio::test]
    async fn falls_back_to_project_id_for_name() {
        let (repo, id) = stored_report().await;
        let handler = ExportReportHandler::new(repo, Arc::new(MockDocumentSink::new()));

        let result = handler
            .handle(ExportReportCommand {
                report_id: id.clone(),
                project_name: Some("   ".to_string()),
            })
            .await
            .unwrap();

        assert!(result.document.content.contains("<h1>proj-apollo</h1>"));
    }

    #[tokio::test]
    async fn sink_failure_is_infrastructure_error() {
        let (repo, id) = stored_report().await;
        let handler = ExportReportHandler::new(repo, Arc::new(MockDocumentSink::failing()));

        let err = handler
            .handle(ExportReportCommand {
                report_id: id.clone(),
                project_name: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ReportError::Infrastructure(_)));
    }

    #[tokio::test]
    async fn missing_report_is_not_found() {
        let handler = ExportReportHandler::new(
            Arc::new(InMemoryReportRepository::new()),
            Arc::new(MockDocumentSink::new()),
        );
        let id = ReportId::new();

        let err = handler
            .handle(ExportReportCommand {
                report_id: id.clone(),
                project_name: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, ReportError::NotFound(id));
    }
}
