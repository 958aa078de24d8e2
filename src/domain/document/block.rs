//! Typed blocks derived from a report's raw text.

use chrono::NaiveDate;
use serde::Serialize;

/// Metadata key carrying the project name.
pub const PROJECT_NAME_KEY: &str = "PROJECT NAME";
/// Metadata key carrying the `<start> TO <end>` reporting window.
pub const REPORTING_PERIOD_KEY: &str = "REPORTING PERIOD";
/// Metadata key carrying the date the report was written.
pub const REPORT_DATE_KEY: &str = "REPORT DATE";

/// Keys recognised as metadata lines, in the form they appear in the text.
pub const METADATA_PREFIXES: [&str; 3] = ["PROJECT NAME:", "REPORTING PERIOD:", "REPORT DATE:"];

/// One classified line of a report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    MetadataPair { key: String, value: MetadataValue },
    SectionHeader { number: String, text: String },
    Bullet { text: String },
    Paragraph { text: String },
}

impl Block {
    /// Short tag for logging and assertions.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Title { .. } => BlockKind::Title,
            Block::MetadataPair { .. } => BlockKind::MetadataPair,
            Block::SectionHeader { .. } => BlockKind::SectionHeader,
            Block::Bullet { .. } => BlockKind::Bullet,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// True for paragraphs produced by blank lines.
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Paragraph { text } if text.is_empty())
    }
}

/// Discriminant of [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Title,
    MetadataPair,
    SectionHeader,
    Bullet,
    Paragraph,
}

/// Value half of a metadata line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetadataValue {
    Text { value: String },
    Period { start: DateValue, end: DateValue },
}

impl MetadataValue {
    pub fn text(value: impl Into<String>) -> Self {
        MetadataValue::Text {
            value: value.into(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text { value } => Some(value),
            MetadataValue::Period { .. } => None,
        }
    }
}

/// A calendar date, or the original text when it could not be read as one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DateValue {
    Date(NaiveDate),
    Raw(String),
}

impl DateValue {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Date(d) => Some(*d),
            DateValue::Raw(_) => None,
        }
    }
}
