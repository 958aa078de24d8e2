//! Storage Adapters
//!
//! Implementations of the ReportRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryReportRepository** - Stores reports in memory (testing/development)
//!
//! The remote report service (see `adapters::remote`) is the production store.

mod in_memory_report_repository;

pub use in_memory_report_repository::InMemoryReportRepository;
