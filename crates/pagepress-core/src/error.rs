// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// Unified error types for the pagepress pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagepressError {
    // -- Configuration errors --
    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Codec errors --
    #[error("failed to decode {}: {}", .path.display(), .detail)]
    Decode { path: PathBuf, detail: String },

    #[error("failed to encode {}: {}", .path.display(), .detail)]
    Encode { path: PathBuf, detail: String },

    // -- Assembly errors --
    #[error("no matching images found in {}", .0.display())]
    EmptyInput(PathBuf),

    // -- Wrapped errors --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PagepressError>;
