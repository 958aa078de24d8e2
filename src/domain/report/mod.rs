//! Report module - generated progress reports and their lifecycle rules.

mod aggregate;
mod errors;
mod quota;
mod values;

pub use aggregate::{Report, ReportParts};
pub use errors::ReportError;
pub use quota::{
    is_legacy_quota_message, quota_exceeded_message, LEGACY_QUOTA_MESSAGE,
    MAX_REPORTS_PER_PROJECT,
};
pub use values::{
    GenerationMetadata, ReportContent, ReportMetrics, ReportPeriod, ReportStatus, ReportType,
};
