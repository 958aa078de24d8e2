//! Report generator adapters.
//!
//! - `TemplateReportGenerator` - deterministic local generator (development/testing)
//!
//! The remote report service in `adapters::remote` also implements
//! `ReportGenerator` and is the production choice.

mod template_report_generator;

pub use template_report_generator::TemplateReportGenerator;
