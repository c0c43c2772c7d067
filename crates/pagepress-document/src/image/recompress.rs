// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// Batch recompression stage. Scans the input directory for accepted
// JPEG files, re-encodes each at the configured level, and writes the
// result under the output directory with the original stem and a
// `.jpg` suffix.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use pagepress_core::config::PipelineConfig;
use pagepress_core::error::Result;
use pagepress_core::types::{ErrorMode, SOURCE_EXTENSIONS, TARGET_EXTENSION};

use crate::image::codec;

/// Outcome of one recompression run.
#[derive(Debug, Default, Serialize)]
pub struct RecompressReport {
    /// Output files, in the order they were written.
    pub converted: Vec<PathBuf>,
    /// Files that failed and were skipped (only in [`ErrorMode::Skip`]).
    pub skipped: Vec<SkippedFile>,
}

/// One input file the run gave up on.
#[derive(Debug, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Recompresses every accepted file in the configured input directory.
///
/// Files are visited in lexicographic name order. The output directory
/// is created if missing, and rerunning with the same inputs rewrites
/// the same outputs.
#[instrument(skip_all, fields(input = %config.input_dir.display(), level = config.level.get()))]
pub fn recompress(config: &PipelineConfig) -> Result<RecompressReport> {
    config.validate()?;
    fs::create_dir_all(&config.output_dir)?;

    let names = accepted_names(&config.input_dir)?;
    debug!(candidates = names.len(), "scanned input directory");

    let mut report = RecompressReport::default();
    for name in names {
        let source = config.input_dir.join(&name);
        match recompress_file(&source, &name, config) {
            Ok(target) => report.converted.push(target),
            Err(err) if config.on_error == ErrorMode::Skip => {
                warn!(file = %source.display(), error = %err, "skipping file");
                report.skipped.push(SkippedFile {
                    path: source,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        converted = report.converted.len(),
        skipped = report.skipped.len(),
        "recompression finished"
    );
    Ok(report)
}

/// Lists accepted file names in lexicographic order.
///
/// The suffix match is case-sensitive, and entries without a UTF-8
/// name are ignored.
fn accepted_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn recompress_file(source: &Path, name: &str, config: &PipelineConfig) -> Result<PathBuf> {
    let stem = SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name);
    let target = config.output_dir.join(format!("{stem}{TARGET_EXTENSION}"));

    let image = codec::decode_file(source)?;
    let bytes = codec::encode_jpeg(&image, config.level, &target)?;
    fs::write(&target, &bytes)?;

    info!(
        source = %source.display(),
        target = %target.display(),
        bytes = bytes.len(),
        "converted image"
    );
    Ok(target)
}
