//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod report;

pub use report::{
    DeleteReportCommand, DeleteReportHandler, ExportReportCommand, ExportReportHandler,
    ExportReportResult, GenerateReportCommand, GenerateReportHandler, GetReportHandler,
    GetReportQuery, ListReportsHandler, ListReportsQuery, RenderReportHandler,
    RenderReportQuery, RenderedReport,
};
