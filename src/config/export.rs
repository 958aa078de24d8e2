//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where printable documents are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output directory for exported reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyExportDir);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./exports")
}
