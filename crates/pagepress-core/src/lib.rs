// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// pagepress-core: configuration, error types, and natural filename
// ordering shared across the pagepress workspace.

pub mod config;
pub mod error;
pub mod natural;
pub mod types;

// Re-export the primary types so callers can use `pagepress_core::PipelineConfig` etc.
pub use config::PipelineConfig;
pub use error::{PagepressError, Result};
pub use types::*;
