//! HTTP routes for report endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    delete_report, export_report, generate_report, get_report, get_report_document,
    list_reports, ReportHandlers,
};

/// Creates the report router with all endpoints.
pub fn report_routes(handlers: ReportHandlers) -> Router {
    Router::new()
        .route(
            "/api/projects/:project_id/reports",
            get(list_reports).post(generate_report),
        )
        .route("/api/reports/:id", get(get_report).delete(delete_report))
        .route("/api/reports/:id/document", get(get_report_document))
        .route("/api/reports/:id/export", get(export_report))
        .with_state(handlers)
}
