//! Per-project report ceiling.

/// Maximum number of live reports a single project may hold.
pub const MAX_REPORTS_PER_PROJECT: u32 = 5;

/// Fragment the report service has historically put in quota rejections.
///
/// Still matched when a response carries no structured error code.
pub const LEGACY_QUOTA_MESSAGE: &str = "Maximum of 5 reports";

/// Message shown when the ceiling is reached. Keeps the legacy fragment intact.
pub fn quota_exceeded_message(limit: u32, current: u32) -> String {
    format!(
        "Maximum of {} reports per project reached ({} existing). Delete a report to generate a new one.",
        limit, current
    )
}

/// True when a free-form service error describes the quota rejection.
pub fn is_legacy_quota_message(message: &str) -> bool {
    message.contains(LEGACY_QUOTA_MESSAGE)
}
