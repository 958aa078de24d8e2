//! Template-based report generator adapter.
//!
//! Writes a report body in the plain-text layout the document parser
//! understands (title, metadata lines, numbered sections, bullets) without
//! calling any model. Metrics come from whatever the generator was seeded
//! with; by default every project reports an empty task list.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Instant;
use tracing::info;

use crate::domain::document::{PROJECT_NAME_KEY, REPORTING_PERIOD_KEY, REPORT_DATE_KEY};
use crate::domain::foundation::{ReportId, Timestamp};
use crate::domain::report::{
    GenerationMetadata, Report, ReportContent, ReportMetrics, ReportPeriod, ReportType,
};
use crate::ports::{GenerationError, GenerationRequest, ReportGenerator};

const MODEL_NAME: &str = "template";

/// Template-based implementation of ReportGenerator.
#[derive(Debug, Clone, Default)]
pub struct TemplateReportGenerator {
    metrics: ReportMetrics,
}

impl TemplateReportGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses fixed metrics for every generated report.
    pub fn with_metrics(metrics: ReportMetrics) -> Self {
        Self { metrics }
    }

    /// Builds the plain-text report body.
    pub fn render_body(
        &self,
        request: &GenerationRequest,
        period: &ReportPeriod,
        report_date: chrono::NaiveDate,
    ) -> String {
        let m = &self.metrics;
        let mut body = String::new();

        body.push_str(&format!(
            "PROGRESS REPORT - {}\n",
            request.report_type.display_name().to_uppercase()
        ));
        body.push_str(&format!("{}: {}\n", PROJECT_NAME_KEY, request.project_id));
        body.push_str(&format!(
            "{}: {} TO {}\n",
            REPORTING_PERIOD_KEY,
            period.start_date().date(),
            period.end_date().date()
        ));
        body.push_str(&format!("{}: {}\n", REPORT_DATE_KEY, report_date));

        for (index, (heading, lines)) in self.sections(request.report_type).into_iter().enumerate() {
            body.push('\n');
            body.push_str(&format!("{}. {}\n", index + 1, heading));
            for line in lines {
                body.push_str(&line);
                body.push('\n');
            }
        }

        if m.total_tasks == 0 {
            body.push_str("\nNo task activity was recorded for this period.\n");
        }

        body
    }

    fn sections(&self, report_type: ReportType) -> Vec<(&'static str, Vec<String>)> {
        let m = &self.metrics;
        let metrics = vec![
            format!("- Total tasks: {}", m.total_tasks),
            format!("- Completed tasks: {}", m.completed_tasks),
            format!("- Completion rate: {}", m.completion_rate),
            format!("- Project health: {}", m.project_health),
            format!("- Team utilization: {}", m.team_utilization),
        ];
        let summary = vec![format!(
            "{} of {} tasks are complete.",
            m.completed_tasks, m.total_tasks
        )];
        let remaining = m.total_tasks - m.completed_tasks.min(m.total_tasks);
        let recommendations = vec![if remaining == 0 {
            "- Plan the next set of deliverables.".to_string()
        } else {
            format!("- Prioritize the {} open tasks.", remaining)
        }];

        match report_type {
            ReportType::Executive => vec![
                ("EXECUTIVE SUMMARY", summary),
                ("KEY METRICS", metrics),
                ("RECOMMENDATIONS", recommendations),
            ],
            ReportType::Detailed => vec![
                ("EXECUTIVE SUMMARY", summary),
                ("KEY METRICS", metrics),
                (
                    "TASK BREAKDOWN",
                    vec![
                        format!("- Open: {}", remaining),
                        format!("- Done: {}", m.completed_tasks),
                    ],
                ),
                ("RECOMMENDATIONS", recommendations),
            ],
            ReportType::Technical => vec![
                ("TECHNICAL HEALTH", vec![format!("Project health is {}.", m.project_health)]),
                ("KEY METRICS", metrics),
                ("RECOMMENDATIONS", recommendations),
            ],
            ReportType::Dashboard => vec![("KEY METRICS", metrics)],
        }
    }
}

#[async_trait]
impl ReportGenerator for TemplateReportGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Report, GenerationError> {
        let started = Instant::now();
        let today = Utc::now().date_naive();
        let period = request
            .resolve_period(today)
            .map_err(|e| GenerationError::failed(e.to_string()))?;

        let body = self.render_body(request, &period, today);
        let mut report = Report::pending(
            ReportId::new(),
            request.project_id.clone(),
            request.report_type,
            period,
        );

        let metadata = GenerationMetadata {
            generation_time_ms: started.elapsed().as_millis() as u64,
            data_points: self.metrics.total_tasks,
            llm_model: MODEL_NAME.to_string(),
        };
        report
            .complete(
                ReportContent::new(body, self.metrics.clone()),
                metadata,
                Timestamp::now(),
            )
            .map_err(|e| GenerationError::failed(e.to_string()))?;

        info!(
            report_id = %report.id(),
            project_id = %request.project_id,
            report_type = %request.report_type,
            "Generated report from template"
        );

        Ok(report)
    }
}
