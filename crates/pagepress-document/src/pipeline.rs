// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// End-to-end pipeline: recompress, then assemble.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use pagepress_core::config::PipelineConfig;
use pagepress_core::error::Result;

use crate::image::recompress::{RecompressReport, recompress};
use crate::pdf::writer::assemble;

/// Outcome of a full pipeline run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Per-file outcome of the recompression stage.
    pub recompress: RecompressReport,
    /// Number of pages in the assembled document.
    pub pages: usize,
    /// Where the document was written.
    pub output_pdf: PathBuf,
}

/// Runs both stages against one configuration.
///
/// The assembly stage reads back whatever the recompression stage left
/// in the output directory, so its page order depends only on the file
/// names found there.
#[instrument(skip_all, fields(input = %config.input_dir.display()))]
pub fn run(config: &PipelineConfig) -> Result<RunReport> {
    let recompress_report = recompress(config)?;
    let pages = assemble(&config.output_dir, &config.output_pdf)?;

    info!(
        pages,
        output = %config.output_pdf.display(),
        "pipeline finished"
    );
    Ok(RunReport {
        recompress: recompress_report,
        pages,
        output_pdf: config.output_pdf.clone(),
    })
}
