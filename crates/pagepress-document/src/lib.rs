// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// pagepress-document: batch JPEG recompression and assembly of the
// results into a single PDF, one page per image.

pub mod image;
pub mod pdf;
pub mod pipeline;

// Re-export the primary entry points so callers can use `pagepress_document::run` etc.
pub use image::recompress::{RecompressReport, SkippedFile, recompress};
pub use pdf::writer::assemble;
pub use pipeline::{RunReport, run};
