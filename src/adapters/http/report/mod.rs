//! HTTP adapter for report endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DocumentResponse, ErrorResponse, ExportParams, GenerateReportRequest, ListReportsParams,
    ReportListResponse, ReportResponse,
};
pub use handlers::ReportHandlers;
pub use routes::report_routes;
