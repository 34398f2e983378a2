//! File-level loading and extraction.

use super::{extract_packages, ExtractionResult};
use crate::parsers::load_document;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Extraction result together with the file it came from
#[derive(Debug, Clone)]
pub struct ExtractedSbom {
    pub source: PathBuf,
    pub result: ExtractionResult,
}

/// Load an SBOM file and extract its packages, with context for error messages
pub fn load_and_extract(path: &Path, quiet: bool) -> Result<ExtractedSbom> {
    if !quiet {
        tracing::info!("Parsing SBOM: {:?}", path);
    }

    let loaded = load_document(path)
        .with_context(|| format!("Cannot read file {}", path.display()))?;
    let result = extract_packages(&loaded.as_document())
        .with_context(|| format!("Error in file {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "{}: {} packages, operating system {}",
            result.format,
            result.packages.len(),
            result.os
        );
    }

    Ok(ExtractedSbom {
        source: path.to_path_buf(),
        result,
    })
}

/// Load and extract several files in parallel.
///
/// Results are returned in input order; a failure in one file does not
/// affect the others.
pub fn extract_batch(paths: &[PathBuf], quiet: bool) -> Vec<Result<ExtractedSbom>> {
    paths
        .par_iter()
        .map(|path| load_and_extract(path, quiet))
        .collect()
}
