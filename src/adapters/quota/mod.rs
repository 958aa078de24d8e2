//! Quota adapters - implementations of the QuotaChecker port.

mod report_quota_manager;

pub use report_quota_manager::ReportQuotaManager;
