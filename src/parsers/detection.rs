//! Format registry and dispatch.
//!
//! Formats are tried in the fixed order of [`FormatKind::ALL`] and the first
//! whose detection predicate accepts the document wins. Well-formed documents
//! match exactly one format, so the order only matters for crafted inputs,
//! but it is stable across runs.

use super::traits::{ParseError, SbomFormat};
use super::{CycloneDxJsonFormat, CycloneDxXmlFormat, SpdxJsonFormat, SyftJsonFormat};
use crate::model::SbomDocument;
use serde::Serialize;
use std::fmt;

/// Human-readable list of the accepted inputs, used in error messages
pub const SUPPORTED_FORMATS: &str = "CycloneDX json or xml, SPDX json or Syft json";

/// Registered SBOM format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatKind {
    #[serde(rename = "spdx-json")]
    SpdxJson,
    #[serde(rename = "syft-json")]
    SyftJson,
    #[serde(rename = "cyclonedx-json")]
    CycloneDxJson,
    #[serde(rename = "cyclonedx-xml")]
    CycloneDxXml,
}

static SPDX_JSON: SpdxJsonFormat = SpdxJsonFormat;
static SYFT_JSON: SyftJsonFormat = SyftJsonFormat;
static CYCLONEDX_JSON: CycloneDxJsonFormat = CycloneDxJsonFormat;
static CYCLONEDX_XML: CycloneDxXmlFormat = CycloneDxXmlFormat;

impl FormatKind {
    /// Every format, in detection order
    pub const ALL: [Self; 4] = [
        Self::SpdxJson,
        Self::SyftJson,
        Self::CycloneDxJson,
        Self::CycloneDxXml,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SpdxJson => "SPDX JSON",
            Self::SyftJson => "Syft JSON",
            Self::CycloneDxJson => "CycloneDX JSON",
            Self::CycloneDxXml => "CycloneDX XML",
        }
    }

    /// The format implementation
    #[must_use]
    pub fn handler(&self) -> &'static dyn SbomFormat {
        match self {
            Self::SpdxJson => &SPDX_JSON,
            Self::SyftJson => &SYFT_JSON,
            Self::CycloneDxJson => &CYCLONEDX_JSON,
            Self::CycloneDxXml => &CYCLONEDX_XML,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects the format variant for a parsed document.
#[derive(Debug, Clone)]
pub struct FormatDetector {
    formats: Vec<FormatKind>,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    /// Detector over every registered format
    #[must_use]
    pub fn new() -> Self {
        Self {
            formats: FormatKind::ALL.to_vec(),
        }
    }

    /// Detector restricted to the given formats, tried in the given order
    #[must_use]
    pub fn with_formats(formats: &[FormatKind]) -> Self {
        Self {
            formats: formats.to_vec(),
        }
    }

    /// First format whose predicate accepts the document
    #[must_use]
    pub fn detect(&self, document: &SbomDocument<'_>) -> Option<FormatKind> {
        let detected = self
            .formats
            .iter()
            .copied()
            .find(|kind| kind.handler().detect(document));

        tracing::debug!(
            "Format detection over {} document: {}",
            document.representation(),
            detected.map_or("no match", |kind| kind.name())
        );

        detected
    }

    /// Every format whose predicate accepts the document, in detection order
    #[must_use]
    pub fn matching(&self, document: &SbomDocument<'_>) -> Vec<FormatKind> {
        self.formats
            .iter()
            .copied()
            .filter(|kind| kind.handler().detect(document))
            .collect()
    }

    /// Like [`Self::detect`], but a missing match is an error naming the accepted formats
    pub fn dispatch(&self, document: &SbomDocument<'_>) -> Result<&'static dyn SbomFormat, ParseError> {
        self.detect(document)
            .map(|kind| kind.handler())
            .ok_or_else(|| {
                ParseError::UnknownFormat(format!(
                    "unsupported file format. Please use one of {SUPPORTED_FORMATS}"
                ))
            })
    }
}
