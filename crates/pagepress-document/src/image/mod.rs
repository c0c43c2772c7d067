// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// Image module: JPEG decode and re-encode primitives plus the batch
// recompression stage.

pub mod codec;
pub mod recompress;

pub use recompress::{RecompressReport, SkippedFile, recompress};
