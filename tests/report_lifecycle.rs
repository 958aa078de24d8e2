//! End-to-end report lifecycle through the application handlers.

use std::sync::Arc;
use tempfile::TempDir;

use progress_reports::adapters::{
    InMemoryReportRepository, LocalFileDocumentSink, ReportQuotaManager, TemplateReportGenerator,
};
use progress_reports::application::{
    DeleteReportCommand, DeleteReportHandler, ExportReportCommand, ExportReportHandler,
    GenerateReportCommand, GenerateReportHandler, ListReportsHandler, ListReportsQuery,
    RenderReportHandler, RenderReportQuery,
};
use progress_reports::domain::document::{parse, render, BlockKind, PresentationNode};
use progress_reports::domain::report::{ReportError, ReportMetrics, ReportType};
use progress_reports::domain::view_mode::{ReportViewState, ViewMode};
use progress_reports::ports::ReportRepository;

struct Pipeline {
    generate: GenerateReportHandler,
    list: ListReportsHandler,
    render: RenderReportHandler,
    export: ExportReportHandler,
    delete: DeleteReportHandler,
    export_dir: TempDir,
}

fn pipeline() -> Pipeline {
    let export_dir = TempDir::new().unwrap();
    let repository: Arc<dyn ReportRepository> = Arc::new(InMemoryReportRepository::new());
    let quota = Arc::new(ReportQuotaManager::new(repository.clone()));
    let generator = Arc::new(TemplateReportGenerator::with_metrics(
        ReportMetrics::from_task_counts(8, 6),
    ));
    let sink = Arc::new(LocalFileDocumentSink::new(export_dir.path()));

    Pipeline {
        generate: GenerateReportHandler::new(quota, generator, repository.clone()),
        list: ListReportsHandler::new(repository.clone()),
        render: RenderReportHandler::new(repository.clone()),
        export: ExportReportHandler::new(repository.clone(), sink),
        delete: DeleteReportHandler::new(repository),
        export_dir,
    }
}

#[test]
fn short_report_parses_into_expected_blocks() {
    let raw = "PROJECT PROGRESS REPORT\nPROJECT NAME: Acme\n1. EXECUTIVE SUMMARY\n- Improved onboarding flow\nOverall progress is strong.";

    let kinds: Vec<BlockKind> = parse(raw).iter().map(|b| b.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Title,
            BlockKind::MetadataPair,
            BlockKind::SectionHeader,
            BlockKind::Bullet,
            BlockKind::Paragraph,
        ]
    );

    let nodes = render(&parse(raw));
    assert_eq!(
        nodes[1],
        PresentationNode::LabeledRow {
            label: "PROJECT NAME".to_string(),
            value: "Acme".to_string(),
        }
    );
}

#[tokio::test]
async fn generate_render_export_delete() {
    let p = pipeline();

    let report = p
        .generate
        .handle(GenerateReportCommand::new("acme", ReportType::Technical))
        .await
        .unwrap();
    assert!(report.is_completed());

    let rendered = p
        .render
        .handle(RenderReportQuery {
            report_id: report.id().clone(),
        })
        .await
        .unwrap();
    assert_eq!(rendered.blocks.len(), rendered.nodes.len());
    assert_eq!(rendered.blocks[0].kind(), BlockKind::Title);
    assert!(rendered
        .blocks
        .iter()
        .any(|b| b.kind() == BlockKind::SectionHeader));

    let exported = p
        .export
        .handle(ExportReportCommand {
            report_id: report.id().clone(),
            project_name: Some("Acme".to_string()),
        })
        .await
        .unwrap();
    assert!(exported.file.path.starts_with(p.export_dir.path()));
    assert!(exported.file.filename.ends_with(".html"));
    let written = std::fs::read_to_string(&exported.file.path).unwrap();
    assert_eq!(written, exported.document.content);

    p.delete
        .handle(DeleteReportCommand {
            report_id: report.id().clone(),
        })
        .await
        .unwrap();

    let page = p
        .list
        .handle(ListReportsQuery {
            project_id: "acme".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(page.reports.is_empty());
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn quota_rejection_sends_screen_to_list() {
    let p = pipeline();
    let mut view = ReportViewState::default();
    let mut last_id = None;

    for _ in 0..5 {
        view.request_generation().unwrap();
        let report = p
            .generate
            .handle(GenerateReportCommand::new("acme", ReportType::Executive))
            .await
            .unwrap();
        view.generation_succeeded(report.id().clone()).unwrap();
        assert_eq!(view.mode(), ViewMode::Displaying);
        last_id = Some(report.id().clone());
        view.start_new().unwrap();
    }

    view.request_generation().unwrap();
    assert!(!view.can_request_generation());
    let err = p
        .generate
        .handle(GenerateReportCommand::new("acme", ReportType::Executive))
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::QuotaExceeded { limit: 5, current: 5 }));

    view.generation_failed(&err).unwrap();
    assert_eq!(view.mode(), ViewMode::Browsing);
    assert_eq!(view.current_report(), None);

    let page = p
        .list
        .handle(ListReportsQuery {
            project_id: "acme".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 5);

    let victim = last_id.unwrap();
    view.select_report(victim.clone()).unwrap();
    assert_eq!(view.mode(), ViewMode::Displaying);
    assert_eq!(view.current_report(), Some(&victim));

    p.delete
        .handle(DeleteReportCommand { report_id: victim })
        .await
        .unwrap();
    view.start_new().unwrap();

    view.request_generation().unwrap();
    let report = p
        .generate
        .handle(GenerateReportCommand::new("acme", ReportType::Dashboard))
        .await
        .unwrap();
    view.generation_succeeded(report.id().clone()).unwrap();
    assert_eq!(view.current_report(), Some(report.id()));
}
