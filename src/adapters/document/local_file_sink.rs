//! Local Filesystem Document Sink - Implementation of DocumentSink.
//!
//! Writes printable reports into a single export directory. Uses atomic
//! writes and SHA-256 checksums so a print dialog never sees a half-written
//! file.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::ports::{DocumentSink, ExportError, ExportedFile, PrintableDocument};

/// Maximum document size allowed (10 MB).
const MAX_DOCUMENT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Local filesystem sink for printable documents.
///
/// # Atomic Writes
///
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// An existing export with the same name is replaced.
#[derive(Debug, Clone)]
pub struct LocalFileDocumentSink {
    output_dir: PathBuf,
}

impl LocalFileDocumentSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Computes SHA-256 checksum of the given content.
    fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Rejects names that would escape the export directory.
    fn validate_filename(filename: &str) -> Result<(), ExportError> {
        let bad = filename.is_empty()
            || filename.starts_with('.')
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..");
        if bad {
            return Err(ExportError::InvalidFilename(filename.to_string()));
        }
        Ok(())
    }
}

impl LocalFileDocumentSink {
    /// Writes `content` to `temp_path`, syncs it, then renames it into place.
    async fn write_atomically(
        temp_path: &Path,
        final_path: &Path,
        content: &str,
    ) -> Result<(), ExportError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.write_all(content.as_bytes()).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.sync_all().await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        drop(file);

        fs::rename(temp_path, final_path).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl DocumentSink for LocalFileDocumentSink {
    async fn write(&self, document: &PrintableDocument) -> Result<ExportedFile, ExportError> {
        let size = document.content.len() as u64;
        if size > MAX_DOCUMENT_SIZE_BYTES {
            return Err(ExportError::TooLarge {
                size,
                max: MAX_DOCUMENT_SIZE_BYTES,
            });
        }

        let filename = document.filename();
        Self::validate_filename(&filename)?;

        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to create export directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let final_path = self.output_dir.join(&filename);
        let temp_path = self.output_dir.join(format!("{}.tmp", filename));

        if let Err(err) = Self::write_atomically(&temp_path, &final_path, &document.content).await {
            if let Err(e) = fs::remove_file(&temp_path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %temp_path.display(), error = %e, "Failed to remove temp file");
                }
            }
            return Err(err);
        }

        debug!(path = %final_path.display(), size, "Wrote printable document");

        Ok(ExportedFile {
            path: final_path,
            filename,
            content_type: document.content_type().to_string(),
            size_bytes: size,
            checksum: Self::compute_checksum(&document.content),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, LocalFileDocumentSink) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let sink = LocalFileDocumentSink::new(temp_dir.path().join("exports"));
        (temp_dir, sink)
    }

    #[tokio::test]
    async fn writes_document_and_reports_metadata() {
        let (_temp, sink) = setup();
        let doc = PrintableDocument::html("<html>hi</html>".to_string(), "apollo-executive");

        let file = sink.write(&doc).await.unwrap();

        assert_eq!(file.filename, "apollo-executive.html");
        assert_eq!(file.content_type, "text/html; charset=utf-8");
        assert_eq!(file.size_bytes, 15);
        assert_eq!(file.checksum.len(), 64);
        let on_disk = tokio::fs::read_to_string(&file.path).await.unwrap();
        assert_eq!(on_disk, "<html>hi</html>");
    }

    #[tokio::test]
    async fn leaves_no_temp_file_behind() {
        let (_temp, sink) = setup();
        let doc = PrintableDocument::html("x".to_string(), "report");
        sink.write(&doc).await.unwrap();

        let mut entries = tokio::fs::read_dir(sink.output_dir()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        assert_eq!(names, vec!["report.html".to_string()]);
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let (_temp, sink) = setup();
        let blocked = sink.output_dir().join("blocked.html");
        tokio::fs::create_dir_all(blocked.join("inner")).await.unwrap();

        let result = sink
            .write(&PrintableDocument::html("x".to_string(), "blocked"))
            .await;
        assert!(matches!(result, Err(ExportError::IoError(_))));

        let mut entries = tokio::fs::read_dir(sink.output_dir()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        assert_eq!(names, vec!["blocked.html".to_string()]);
    }

    #[tokio::test]
    async fn overwrites_existing_export() {
        let (_temp, sink) = setup();
        sink.write(&PrintableDocument::html("first".to_string(), "r"))
            .await
            .unwrap();
        let file = sink
            .write(&PrintableDocument::html("second".to_string(), "r"))
            .await
            .unwrap();

        let on_disk = tokio::fs::read_to_string(&file.path).await.unwrap();
        assert_eq!(on_disk, "second");
    }

    #[test]
    fn checksum_matches_known_sha256() {
        assert_eq!(
            LocalFileDocumentSink::compute_checksum("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn rejects_path_traversal() {
        let (_temp, sink) = setup();
        let doc = PrintableDocument::html("x".to_string(), "../escape");
        assert!(matches!(
            sink.write(&doc).await,
            Err(ExportError::InvalidFilename(_))
        ));
    }
}
