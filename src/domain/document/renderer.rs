//! Maps blocks onto presentation primitives.
//!
//! Rendering is a pure function of the block sequence, so rendering the same
//! document twice always produces identical output.

use serde::Serialize;

use super::block::{Block, DateValue, MetadataValue};

/// Glyph placed between the two ends of a reporting period.
pub const PERIOD_SEPARATOR_GLYPH: &str = "→";
/// Marker placed in front of bullet items.
pub const BULLET_MARKER: char = '•';

const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// A display-ready node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum PresentationNode {
    /// Level 1 for the report title, level 2 for numbered sections.
    Heading { level: u8, text: String },
    LabeledRow { label: String, value: String },
    ListItem { marker: char, text: String },
    Text { text: String },
    /// Vertical spacing with no visible content.
    Spacer,
}

/// Renders a block sequence, one node per block.
pub fn render(blocks: &[Block]) -> Vec<PresentationNode> {
    blocks.iter().map(render_block).collect()
}

fn render_block(block: &Block) -> PresentationNode {
    match block {
        Block::Title { text } => PresentationNode::Heading {
            level: 1,
            text: text.clone(),
        },
        Block::MetadataPair { key, value } => PresentationNode::LabeledRow {
            label: key.clone(),
            value: render_metadata_value(value),
        },
        Block::SectionHeader { text, .. } => PresentationNode::Heading {
            level: 2,
            text: text.clone(),
        },
        Block::Bullet { text } => PresentationNode::ListItem {
            marker: BULLET_MARKER,
            text: text.clone(),
        },
        Block::Paragraph { text } if text.is_empty() => PresentationNode::Spacer,
        Block::Paragraph { text } => PresentationNode::Text { text: text.clone() },
    }
}

fn render_metadata_value(value: &MetadataValue) -> String {
    match value {
        MetadataValue::Text { value } => value.clone(),
        MetadataValue::Period { start, end } => format!(
            "{} {} {}",
            render_date(start),
            PERIOD_SEPARATOR_GLYPH,
            render_date(end)
        ),
    }
}

fn render_date(value: &DateValue) -> String {
    match value {
        DateValue::Date(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        DateValue::Raw(raw) => raw.clone(),
    }
}

/// Renders nodes as an HTML fragment.
pub fn to_html(nodes: &[PresentationNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            PresentationNode::Heading { level, text } => {
                let class = if *level == 1 {
                    "report-title"
                } else {
                    "report-section"
                };
                out.push_str(&format!(
                    "<h{level} class=\"{class}\">{}</h{level}>\n",
                    html_escape(text)
                ));
            }
            PresentationNode::LabeledRow { label, value } => out.push_str(&format!(
                "<div class=\"report-meta\"><span class=\"label\">{}:</span> <span class=\"value\">{}</span></div>\n",
                html_escape(label),
                html_escape(value)
            )),
            PresentationNode::ListItem { marker, text } => out.push_str(&format!(
                "<div class=\"report-bullet\"><span class=\"marker\">{}</span> {}</div>\n",
                marker,
                html_escape(text)
            )),
            PresentationNode::Text { text } => {
                out.push_str(&format!("<p>{}</p>\n", html_escape(text)))
            }
            PresentationNode::Spacer => out.push_str("<div class=\"report-spacer\"></div>\n"),
        }
    }
    out
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
