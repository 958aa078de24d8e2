//! Remote report service adapter.
//!
//! Talks JSON over HTTP to the service that generates and stores reports.

mod report_service_client;
mod wire;

pub use report_service_client::{ClientBuildError, RemoteReportService, RemoteReportServiceConfig};
