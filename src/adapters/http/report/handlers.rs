//! HTTP handlers for report endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::{
    DeleteReportCommand, DeleteReportHandler, ExportReportCommand, ExportReportHandler,
    GenerateReportCommand, GenerateReportHandler, GetReportHandler, GetReportQuery,
    ListReportsHandler, ListReportsQuery, RenderReportHandler, RenderReportQuery,
};
use crate::adapters::quota::ReportQuotaManager;
use crate::domain::foundation::ReportId;
use crate::domain::report::{ReportError, ReportType};
use crate::ports::{DocumentSink, ReportGenerator, ReportRepository};

use super::dto::{
    DocumentResponse, ErrorResponse, ExportParams, GenerateReportRequest, ListReportsParams,
    ReportListResponse, ReportResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReportHandlers {
    generate_handler: Arc<GenerateReportHandler>,
    list_handler: Arc<ListReportsHandler>,
    get_handler: Arc<GetReportHandler>,
    render_handler: Arc<RenderReportHandler>,
    export_handler: Arc<ExportReportHandler>,
    delete_handler: Arc<DeleteReportHandler>,
}

impl ReportHandlers {
    pub fn new(
        generate_handler: Arc<GenerateReportHandler>,
        list_handler: Arc<ListReportsHandler>,
        get_handler: Arc<GetReportHandler>,
        render_handler: Arc<RenderReportHandler>,
        export_handler: Arc<ExportReportHandler>,
        delete_handler: Arc<DeleteReportHandler>,
    ) -> Self {
        Self {
            generate_handler,
            list_handler,
            get_handler,
            render_handler,
            export_handler,
            delete_handler,
        }
    }

    /// Wires every handler from the three outward ports.
    pub fn from_ports(
        repository: Arc<dyn ReportRepository>,
        generator: Arc<dyn ReportGenerator>,
        sink: Arc<dyn DocumentSink>,
    ) -> Self {
        let quota = Arc::new(ReportQuotaManager::new(repository.clone()));
        Self::new(
            Arc::new(GenerateReportHandler::new(quota, generator, repository.clone())),
            Arc::new(ListReportsHandler::new(repository.clone())),
            Arc::new(GetReportHandler::new(repository.clone())),
            Arc::new(RenderReportHandler::new(repository.clone())),
            Arc::new(ExportReportHandler::new(repository.clone(), sink)),
            Arc::new(DeleteReportHandler::new(repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/projects/:project_id/reports - Generate a report
pub async fn generate_report(
    State(handlers): State<ReportHandlers>,
    Path(project_id): Path<String>,
    body: Bytes,
) -> Response {
    let req = match decode_generate_body(&body) {
        Ok(req) => req,
        Err(e) => return handle_report_error(e),
    };
    let cmd = GenerateReportCommand::new(project_id, req.report_type)
        .with_window(req.start_date, req.end_date);

    match handlers.generate_handler.handle(cmd).await {
        Ok(report) => (StatusCode::CREATED, Json(ReportResponse::from(&report))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/projects/:project_id/reports - List a project's reports
pub async fn list_reports(
    State(handlers): State<ReportHandlers>,
    Path(project_id): Path<String>,
    Query(params): Query<ListReportsParams>,
) -> Response {
    let report_type = match params.report_type.as_deref().filter(|t| !t.is_empty()) {
        Some(raw) => match raw.parse::<ReportType>() {
            Ok(t) => Some(t),
            Err(e) => return bad_request(e.to_string()),
        },
        None => None,
    };

    let query = ListReportsQuery {
        project_id,
        report_type,
        page: params.page,
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(ReportListResponse::from(page))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/reports/:id - Get report details
pub async fn get_report(
    State(handlers): State<ReportHandlers>,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetReportQuery { report_id }).await {
        Ok(report) => (StatusCode::OK, Json(ReportResponse::from(&report))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/reports/:id/document - Parsed blocks and rendered nodes
pub async fn get_report_document(
    State(handlers): State<ReportHandlers>,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .render_handler
        .handle(RenderReportQuery { report_id })
        .await
    {
        Ok(rendered) => (StatusCode::OK, Json(DocumentResponse::from(rendered))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/reports/:id/export - Printable HTML document
pub async fn export_report(
    State(handlers): State<ReportHandlers>,
    Path(report_id): Path<String>,
    Query(params): Query<ExportParams>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ExportReportCommand {
        report_id,
        project_name: params.project_name,
    };

    match handlers.export_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, result.file.content_type.clone()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", result.file.filename),
                ),
            ],
            result.document.content,
        )
            .into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// DELETE /api/reports/:id - Delete a report
pub async fn delete_report(
    State(handlers): State<ReportHandlers>,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteReportCommand { report_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// An empty body asks for the defaults; anything else must decode.
fn decode_generate_body(body: &[u8]) -> Result<GenerateReportRequest, ReportError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateReportRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ReportError::validation("body", format!("Invalid report request: {}", e)))
}

fn parse_report_id(raw: &str) -> Result<ReportId, Response> {
    raw.parse::<ReportId>()
        .map_err(|_| bad_request("Invalid report ID"))
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(error: &ReportError) -> StatusCode {
    match error {
        ReportError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ReportError::QuotaExceeded { .. } => StatusCode::CONFLICT,
        ReportError::NotFound(_) => StatusCode::NOT_FOUND,
        ReportError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
        ReportError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
        ReportError::InvalidState(_) => StatusCode::CONFLICT,
        ReportError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_report_error(error: ReportError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        error!(error = %error, "Report request failed");
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}
