//! Report command and query handlers.

mod delete_report;
mod export_report;
mod generate_report;
mod get_report;
mod list_reports;
mod render_report;

pub use delete_report::{DeleteReportCommand, DeleteReportHandler};
pub use export_report::{ExportReportCommand, ExportReportHandler, ExportReportResult};
pub use generate_report::{GenerateReportCommand, GenerateReportHandler};
pub use get_report::{GetReportHandler, GetReportQuery};
pub use list_reports::{ListReportsHandler, ListReportsQuery};
pub use render_report::{RenderReportHandler, RenderReportQuery, RenderedReport};
