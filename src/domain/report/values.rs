//! Value objects describing a generated report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Percentage, StateMachine, Timestamp, ValidationError};

/// Flavour of report requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Executive,
    Detailed,
    Technical,
    Dashboard,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Executive,
        ReportType::Detailed,
        ReportType::Technical,
        ReportType::Dashboard,
    ];

    /// Wire/storage identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Executive => "executive",
            ReportType::Detailed => "detailed",
            ReportType::Technical => "technical",
            ReportType::Dashboard => "dashboard",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::Executive => "Executive Summary",
            ReportType::Detailed => "Detailed Analysis",
            ReportType::Technical => "Technical Report",
            ReportType::Dashboard => "Dashboard Overview",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "executive" => Ok(ReportType::Executive),
            "detailed" => Ok(ReportType::Detailed),
            "technical" => Ok(ReportType::Technical),
            "dashboard" => Ok(ReportType::Dashboard),
            other => Err(ValidationError::invalid_format(
                "report_type",
                format!("unknown report type '{}'", other),
            )),
        }
    }
}

/// Lifecycle status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Completed,
    Failed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Completed => "completed",
            ReportStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "completed" => Ok(ReportStatus::Completed),
            "failed" => Ok(ReportStatus::Failed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown report status '{}'", other),
            )),
        }
    }
}

impl StateMachine for ReportStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (ReportStatus::Pending, ReportStatus::Completed)
                | (ReportStatus::Pending, ReportStatus::Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ReportStatus::Pending => vec![ReportStatus::Completed, ReportStatus::Failed],
            ReportStatus::Completed | ReportStatus::Failed => vec![],
        }
    }
}

/// Window of time a report summarizes. `start_date <= end_date` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    start_date: Timestamp,
    end_date: Timestamp,
}

impl ReportPeriod {
    /// Number of days covered when the caller does not pick a window.
    pub const DEFAULT_DAYS: i64 = 30;

    pub fn new(start_date: Timestamp, end_date: Timestamp) -> Result<Self, ValidationError> {
        if start_date.is_after(&end_date) {
            return Err(ValidationError::invalid_format(
                "period",
                "start date must not be after end date",
            ));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Builds a period from calendar dates.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(Timestamp::start_of_day(start), Timestamp::start_of_day(end))
    }

    /// The `days` days leading up to `end`.
    pub fn trailing(end: Timestamp, days: i64) -> Self {
        Self {
            start_date: end.minus_days(days.max(0)),
            end_date: end,
        }
    }

    pub fn start_date(&self) -> &Timestamp {
        &self.start_date
    }

    pub fn end_date(&self) -> &Timestamp {
        &self.end_date
    }
}

impl<'de> Deserialize<'de> for ReportPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start_date: Timestamp,
            end_date: Timestamp,
        }

        let raw = Raw::deserialize(deserializer)?;
        ReportPeriod::new(raw.start_date, raw.end_date).map_err(serde::de::Error::custom)
    }
}

/// Quantitative summary computed by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReportMetrics {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub completion_rate: Percentage,
    pub project_health: Percentage,
    pub team_utilization: Percentage,
}

impl ReportMetrics {
    pub fn new(
        total_tasks: u32,
        completed_tasks: u32,
        completion_rate: Percentage,
        project_health: Percentage,
        team_utilization: Percentage,
    ) -> Result<Self, ValidationError> {
        let metrics = Self {
            total_tasks,
            completed_tasks,
            completion_rate,
            project_health,
            team_utilization,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Metrics for `completed` of `total` tasks. Health and utilization
    /// follow the completion ratio.
    pub fn from_task_counts(total: u32, completed: u32) -> Self {
        let completed = completed.min(total);
        let rate = Percentage::ratio(completed, total);
        Self {
            total_tasks: total,
            completed_tasks: completed,
            completion_rate: rate,
            project_health: rate,
            team_utilization: rate,
        }
    }

    /// Checks `completed_tasks <= total_tasks`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.completed_tasks > self.total_tasks {
            return Err(ValidationError::out_of_range(
                "completed_tasks",
                0,
                i64::from(self.total_tasks),
                i64::from(self.completed_tasks),
            ));
        }
        Ok(())
    }
}

/// Generated document plus its derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReportContent {
    pub raw_content: String,
    pub metrics: ReportMetrics,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl ReportContent {
    pub fn new(raw_content: impl Into<String>, metrics: ReportMetrics) -> Self {
        Self {
            raw_content: raw_content.into(),
            metrics,
            insights: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn with_insights(mut self, insights: Vec<String>) -> Self {
        self.insights = insights;
        self
    }

    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }
}

/// Bookkeeping about how a report was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerationMetadata {
    pub generation_time_ms: u64,
    pub data_points: u32,
    pub llm_model: String,
}
