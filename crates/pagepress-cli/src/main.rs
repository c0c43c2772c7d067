// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// Entry point. Parses arguments, initialises logging, and drives the
// two-stage pipeline: recompress the input images, then assemble the
// results into a PDF.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pagepress_core::config::PipelineConfig;
use pagepress_core::error::Result;
use pagepress_core::types::{CompressionLevel, ErrorMode};
use pagepress_document::pipeline;

/// Recompresses a directory of JPEG scans and binds them into a PDF.
#[derive(Debug, Parser)]
#[command(name = "pagepress", version, about)]
struct Args {
    /// Directory scanned for .jpeg and .JPG files [default: imgs]
    input_dir: Option<PathBuf>,

    /// Compression level from 0 (lightest) to 100 (heaviest) [default: 50]
    #[arg(short, long)]
    level: Option<u8>,

    /// Where converted images are written [default: <input>/jpg]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Where the assembled document is written [default: <input>/compression-<level>.pdf]
    #[arg(long)]
    output_pdf: Option<PathBuf>,

    /// Skip files that fail to convert instead of aborting
    #[arg(long)]
    skip_errors: bool,

    /// Read settings from a JSON file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Builds the effective configuration from a config file, flags, and
/// the built-in defaults, in rising priority.
fn resolve(args: Args) -> Result<PipelineConfig> {
    let Args {
        input_dir,
        level,
        output_dir,
        output_pdf,
        skip_errors,
        config,
    } = args;

    let mut resolved = match config {
        Some(path) => PipelineConfig::load(path)?,
        None => {
            let level = match level {
                Some(value) => CompressionLevel::new(value)?,
                None => CompressionLevel::default(),
            };
            PipelineConfig::for_input(
                input_dir.clone().unwrap_or_else(|| PathBuf::from("imgs")),
                level,
            )
        }
    };

    if let Some(dir) = input_dir {
        resolved.input_dir = dir;
    }
    if let Some(value) = level {
        resolved.level = CompressionLevel::new(value)?;
    }
    if let Some(dir) = output_dir {
        resolved.output_dir = dir;
    }
    if let Some(path) = output_pdf {
        resolved.output_pdf = path;
    }
    if skip_errors {
        resolved.on_error = ErrorMode::Skip;
    }
    Ok(resolved)
}

fn execute(args: Args) -> Result<pipeline::RunReport> {
    let config = resolve(args)?;
    tracing::info!(
        input = %config.input_dir.display(),
        level = config.level.get(),
        "starting pipeline"
    );
    pipeline::run(&config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match execute(Args::parse()) {
        Ok(report) => {
            tracing::info!(
                pages = report.pages,
                output = %report.output_pdf.display(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "pipeline failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Running with no flags reproduces the standard layout.
    #[test]
    fn bare_invocation_uses_default_layout() {
        let args = Args::parse_from(["pagepress"]);
        let config = resolve(args).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("imgs"));
        assert_eq!(config.output_dir, PathBuf::from("imgs/jpg"));
        assert_eq!(config.output_pdf, PathBuf::from("imgs/compression-50.pdf"));
        assert_eq!(config.level.get(), 50);
        assert_eq!(config.on_error, ErrorMode::Abort);
    }

    /// The level flag shapes the derived document name.
    #[test]
    fn level_flag_shapes_derived_pdf_name() {
        let args = Args::parse_from(["pagepress", "scans", "--level", "80"]);
        let config = resolve(args).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("scans"));
        assert_eq!(config.output_pdf, PathBuf::from("scans/compression-80.pdf"));
    }

    /// Levels beyond 100 are refused before any work starts.
    #[test]
    fn out_of_range_level_is_rejected() {
        let args = Args::parse_from(["pagepress", "--level", "150"]);
        assert!(resolve(args).is_err());
    }

    /// Flags take priority over values read from a config file.
    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(
            &path,
            r#"{"input_dir": "a", "output_dir": "b", "output_pdf": "c.pdf", "level": 20}"#,
        )
        .unwrap();

        let args = Args::parse_from([
            "pagepress",
            "--config",
            path.to_str().unwrap(),
            "--level",
            "70",
            "--skip-errors",
        ]);
        let config = resolve(args).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("a"));
        assert_eq!(config.output_dir, PathBuf::from("b"));
        assert_eq!(config.level.get(), 70);
        assert_eq!(config.on_error, ErrorMode::Skip);
    }
}
