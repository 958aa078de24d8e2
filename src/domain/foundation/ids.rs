//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a generated report.
///
/// Reports minted here carry a UUID, but ids handed out by the remote
/// report service use its own format, so the value is kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReportId(String);

impl ReportId {
    /// Creates a new random ReportId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("report_id"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for ReportId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReportId> for String {
    fn from(id: ReportId) -> Self {
        id.0
    }
}

/// Reference to a project owned by the project-management system.
///
/// Projects live outside this crate, so the identifier is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new ProjectId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("project_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_id_parses_its_display_form() {
        let id = ReportId::new();
        let parsed: ReportId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn report_id_accepts_foreign_formats() {
        let id: ReportId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().unwrap();
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");

        let from_json: ReportId = serde_json::from_str("\"65a1f0c2e4b0a1b2c3d4e5f6\"").unwrap();
        assert_eq!(from_json, id);
    }

    #[test]
    fn report_id_rejects_blank_values() {
        assert!("".parse::<ReportId>().is_err());
        assert!("  ".parse::<ReportId>().is_err());
        assert!(serde_json::from_str::<ReportId>("\"\"").is_err());
    }

    #[test]
    fn project_id_rejects_blank_values() {
        assert!(ProjectId::new("").is_err());
        assert!(ProjectId::new("   ").is_err());
    }

    #[test]
    fn project_id_trims_surrounding_whitespace() {
        let id = ProjectId::new("  proj-42 ").unwrap();
        assert_eq!(id.as_str(), "proj-42");
    }

    #[test]
    fn project_id_serializes_as_plain_string() {
        let id = ProjectId::new("proj-42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"proj-42\"");
    }
}
