//! Extract command handler.
//!
//! Implements the `extract` subcommand: offline package and OS extraction
//! for one or more SBOM files.

use super::report_failure;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, extract_batch, should_use_color, write_output, OutputTarget};
use crate::reports::create_reporter_with_options;
use anyhow::Result;
use std::path::PathBuf;

/// Run the extract command, returning the desired exit code.
///
/// Files are processed in parallel; every readable document is reported,
/// and any failure makes the exit code [`exit_codes::ERROR`].
pub fn run_extract(inputs: &[PathBuf], config: &AppConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let mut extracted = Vec::with_capacity(inputs.len());
    let mut failed = 0usize;

    for result in extract_batch(inputs, quiet) {
        match result {
            Ok(sbom) => extracted.push(sbom),
            Err(e) => {
                report_failure(&e);
                failed += 1;
            }
        }
    }

    if !extracted.is_empty() {
        let target = OutputTarget::from_option(config.output.file.clone());
        let reporter = create_reporter_with_options(
            config.output.format,
            should_use_color(config.output.no_color, &target),
        );
        let report = reporter.generate_extraction_report(&extracted)?;
        write_output(&report, &target, quiet)?;
    }

    if failed > 0 {
        tracing::warn!("{} of {} files could not be processed", failed, inputs.len());
        return Ok(exit_codes::ERROR);
    }
    Ok(exit_codes::SUCCESS)
}
