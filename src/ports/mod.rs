//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportRepository` - authoritative store of generated reports
//! - `ReportGenerator` - external service that writes report content
//! - `QuotaChecker` - per-project report ceiling
//! - `DocumentSink` - destination for printable documents

mod document_sink;
mod quota_checker;
mod report_generator;
mod report_repository;

pub use document_sink::{DocumentSink, ExportError, ExportFormat, ExportedFile, PrintableDocument};
pub use quota_checker::{QuotaChecker, QuotaUsage};
pub use report_generator::{GenerationError, GenerationRequest, ReportGenerator};
pub use report_repository::{Pagination, ReportFilter, ReportPage, ReportRepository};
