// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// Pipeline configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PagepressError, Result};
use crate::types::{CompressionLevel, ErrorMode};

/// Settings for one pipeline run, covering both stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory scanned for source images.
    pub input_dir: PathBuf,
    /// Directory the recompressed copies are written to.
    pub output_dir: PathBuf,
    /// Path of the assembled document.
    pub output_pdf: PathBuf,
    /// Compression strength applied to every accepted image.
    #[serde(default)]
    pub level: CompressionLevel,
    /// Reaction to files that fail to convert.
    #[serde(default)]
    pub on_error: ErrorMode,
}

impl PipelineConfig {
    /// Derives the standard layout from an input directory: converted
    /// copies go to `<input>/jpg` and the assembled document next to
    /// them as `<input>/compression-<level>.pdf`.
    pub fn for_input(input_dir: impl Into<PathBuf>, level: CompressionLevel) -> Self {
        let input_dir = input_dir.into();
        let output_dir = input_dir.join("jpg");
        let output_pdf = input_dir.join(format!("compression-{}.pdf", level));
        Self {
            input_dir,
            output_dir,
            output_pdf,
            level,
            on_error: ErrorMode::default(),
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(PagepressError::Config(format!(
                "input directory {} does not exist",
                self.input_dir.display()
            )));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_input("imgs", CompressionLevel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The default layout hangs everything off the input directory.
    #[test]
    fn default_layout_derives_from_input_dir() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("imgs"));
        assert_eq!(config.output_dir, PathBuf::from("imgs/jpg"));
        assert_eq!(config.output_pdf, PathBuf::from("imgs/compression-50.pdf"));
        assert_eq!(config.level.get(), 50);
        assert_eq!(config.on_error, ErrorMode::Abort);
    }

    /// The derived document name reflects the requested level.
    #[test]
    fn pdf_name_includes_level() {
        let level = CompressionLevel::new(80).unwrap();
        let config = PipelineConfig::for_input("scans", level);
        assert_eq!(config.output_pdf, PathBuf::from("scans/compression-80.pdf"));
    }

    /// A run cannot start from a nonexistent input directory.
    #[test]
    fn validate_rejects_missing_input_dir() {
        let config = PipelineConfig::for_input("definitely/not/here", CompressionLevel::default());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PagepressError::Config(_)));
    }

    /// Loading parses JSON and applies the level range check.
    #[test]
    fn load_parses_and_validates_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagepress.json");
        std::fs::write(
            &path,
            r#"{"input_dir": "scans", "output_dir": "scans/jpg", "output_pdf": "scans/out.pdf", "level": 30}"#,
        )
        .unwrap();

        let config = PipelineConfig::load(&path).unwrap();
        assert_eq!(config.level.get(), 30);
        assert_eq!(config.on_error, ErrorMode::Abort);

        std::fs::write(
            &path,
            r#"{"input_dir": "scans", "output_dir": "scans/jpg", "output_pdf": "scans/out.pdf", "level": 101}"#,
        )
        .unwrap();
        let err = PipelineConfig::load(&path).unwrap_err();
        assert!(matches!(err, PagepressError::Serialization(_)));
    }
}
