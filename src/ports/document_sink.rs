//! Document Sink Port - hands printable documents to the outside world.
//!
//! The export adapter only builds strings; a sink decides where they go
//! (a file for a print dialog, a PDF engine, an HTTP response).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::report::ReportError;

/// Port for persisting a printable document.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Write the document and describe the resulting file.
    async fn write(&self, document: &PrintableDocument) -> Result<ExportedFile, ExportError>;
}

/// Formats a printable document can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Html,
    Text,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(ExportFormat::Html),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A rendered, self-contained document ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableDocument {
    pub content: String,
    pub format: ExportFormat,
    /// Filename without extension.
    pub base_filename: String,
}

impl PrintableDocument {
    pub fn html(content: String, base_filename: impl Into<String>) -> Self {
        Self {
            content,
            format: ExportFormat::Html,
            base_filename: base_filename.into(),
        }
    }

    /// Suggested filename including extension.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.base_filename, self.format.extension())
    }

    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// Where a sink put a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid export filename: {0}")]
    InvalidFilename(String),

    #[error("Document too large: {size} bytes exceeds {max}")]
    TooLarge { size: u64, max: u64 },

    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

impl From<ExportError> for ReportError {
    fn from(err: ExportError) -> Self {
        ReportError::infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_parses_from_string() {
        assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn printable_document_builds_filename_from_format() {
        let doc = PrintableDocument::html("<html></html>".to_string(), "acme-executive");
        assert_eq!(doc.filename(), "acme-executive.html");
        assert_eq!(doc.content_type(), "text/html; charset=utf-8");
    }

    #[test]
    fn document_sink_is_object_safe() {
        fn check<T: DocumentSink + ?Sized>() {}
        check::<dyn DocumentSink>();
    }
}
