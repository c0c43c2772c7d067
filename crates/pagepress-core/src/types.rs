// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// Value types shared by the recompression and assembly stages.

use serde::{Deserialize, Serialize};

use crate::error::{PagepressError, Result};

/// File name suffixes accepted by the recompression stage.
///
/// Matching is case-sensitive: `.jpeg` and `.JPG` are accepted while
/// `.JPEG` and `.jpg` are not.
pub const SOURCE_EXTENSIONS: &[&str] = &[".jpeg", ".JPG"];

/// Suffix written by the recompression stage and scanned by assembly.
pub const TARGET_EXTENSION: &str = ".jpg";

// -- Compression level ----------------------------------------------------

/// Requested compression strength, from 0 (lightest) to 100 (heaviest).
///
/// Values outside the range are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX {
            return Err(PagepressError::Config(format!(
                "compression level {} is out of range {}..={}",
                level,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Maps the level onto the JPEG encoder's quality scale, where a
    /// heavier level means a lower quality setting.
    pub fn jpeg_quality(self) -> u8 {
        (Self::MAX - self.0).max(1)
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for CompressionLevel {
    type Error = PagepressError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<CompressionLevel> for u8 {
    fn from(level: CompressionLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -- Error handling mode --------------------------------------------------

/// How the recompression stage reacts to a file that fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Stop the run on the first failed file.
    #[default]
    Abort,
    /// Record the failure and continue with the remaining files.
    Skip,
}
