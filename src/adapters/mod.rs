//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - in-memory report store
//! - `quota` - repository-backed report quota
//! - `generator` - local template report generator
//! - `remote` - HTTP client for the remote report service
//! - `document` - filesystem sink for printable documents
//! - `http` - axum REST endpoints

pub mod document;
pub mod generator;
pub mod http;
pub mod quota;
pub mod remote;
pub mod storage;

pub use document::LocalFileDocumentSink;
pub use generator::TemplateReportGenerator;
pub use quota::ReportQuotaManager;
pub use remote::{RemoteReportService, RemoteReportServiceConfig};
pub use storage::InMemoryReportRepository;
