//! Printable report documents.
//!
//! Builds a self-contained HTML page for a report: title block, generation
//! date, reporting period, the raw body verbatim, and a footer. Pure string
//! work; writing the page somewhere is the job of a `DocumentSink`.

use crate::domain::report::Report;

use super::renderer::{html_escape, PERIOD_SEPARATOR_GLYPH};

const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// Attribution line printed at the foot of every exported report.
pub const FOOTER_ATTRIBUTION: &str = "Generated by the AI progress report service";

/// Builds the printable HTML document for `report`.
pub fn to_printable_document(report: &Report, project_name: &str) -> String {
    let generated_on = report
        .generated_at()
        .unwrap_or(report.created_at())
        .date()
        .format(DISPLAY_DATE_FORMAT)
        .to_string();
    let period = format!(
        "{} {} {}",
        report.period().start_date().date().format(DISPLAY_DATE_FORMAT),
        PERIOD_SEPARATOR_GLYPH,
        report.period().end_date().date().format(DISPLAY_DATE_FORMAT)
    );
    let title = format!("{} - {}", project_name, report.report_type().display_name());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <header class="report-header">
        <h1>{project}</h1>
        <h2>{report_type}</h2>
        <p class="report-meta">Generated on {generated_on}</p>
        <p class="report-meta">Reporting period: {period}</p>
    </header>
    <main>
        <pre class="report-body">{body}</pre>
    </main>
    <footer class="report-footer">{footer}</footer>
</body>
</html>"#,
        title = html_escape(&title),
        css = PRINT_CSS,
        project = html_escape(project_name),
        report_type = html_escape(report.report_type().display_name()),
        generated_on = generated_on,
        period = period,
        body = html_escape(report.raw_content()),
        footer = FOOTER_ATTRIBUTION,
    )
}

/// Characters of the report id kept in export filenames.
const ID_SUFFIX_LEN: usize = 8;

/// Filesystem-friendly base name: `<project>-<type>-<yyyy-mm-dd>-<id tail>`.
///
/// The id tail keeps same-day exports of sibling reports apart.
pub fn printable_base_filename(report: &Report, project_name: &str) -> String {
    let mut slug = String::with_capacity(project_name.len());
    for c in project_name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "report" } else { slug };

    format!(
        "{}-{}-{}-{}",
        slug,
        report.report_type().as_str(),
        report
            .generated_at()
            .unwrap_or(report.created_at())
            .date(),
        id_suffix(report)
    )
}

// Tail rather than head: document-store ids share a leading timestamp.
fn id_suffix(report: &Report) -> String {
    let chars: Vec<char> = report
        .id()
        .as_str()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    chars[chars.len().saturating_sub(ID_SUFFIX_LEN)..].iter().collect()
}

const PRINT_CSS: &str = r#"
:root {
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--text-color);
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem;
}

.report-header {
    border-bottom: 2px solid var(--border-color);
    margin-bottom: 1.5rem;
}

.report-header h1 { margin-bottom: 0.25rem; }
.report-header h2 { margin-top: 0; color: var(--muted-color); font-weight: 500; }

.report-meta {
    color: var(--muted-color);
    margin: 0.25rem 0;
}

.report-body {
    white-space: pre-wrap;
    font-family: inherit;
    line-height: 1.6;
}

.report-footer {
    border-top: 1px solid var(--border-color);
    margin-top: 2rem;
    padding-top: 1rem;
    color: var(--muted-color);
    font-size: 0.875rem;
}

@media print {
    body { padding: 0; max-width: none; }
}
"#;
