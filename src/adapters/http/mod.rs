//! HTTP adapters - REST API implementations.
//!
//! `api_router` assembles every endpoint; transport layers (tracing, CORS,
//! timeouts) are added by the binary.

pub mod report;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub use report::{report_routes, ReportHandlers};

/// Full API router: report endpoints plus a health check.
pub fn api_router(handlers: ReportHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(report_routes(handlers))
}

/// GET /health - Liveness check
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
