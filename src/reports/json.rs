//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::audit::{AuditReason, AuditReport};
use crate::model::OsIdentity;
use crate::parsers::FormatKind;
use crate::pipeline::ExtractedSbom;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct DocumentEntry<'a> {
    source: String,
    format: FormatKind,
    os: &'a OsIdentity,
    packages: &'a [String],
}

impl<'a> DocumentEntry<'a> {
    fn from_extracted(sbom: &'a ExtractedSbom) -> Self {
        Self {
            source: sbom.source.display().to_string(),
            format: sbom.result.format,
            os: &sbom.result.os,
            packages: &sbom.result.packages,
        }
    }
}

#[derive(Serialize)]
struct ExtractionJson<'a> {
    generated_at: String,
    documents: Vec<DocumentEntry<'a>>,
}

#[derive(Serialize)]
struct AuditJson<'a> {
    source: String,
    format: FormatKind,
    generated_at: String,
    os: &'a OsIdentity,
    packages: &'a [String],
    vulnerability_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    cvss_score: Option<f64>,
    reasons: &'a [AuditReason],
}

impl ReportGenerator for JsonReporter {
    fn generate_extraction_report(&self, sboms: &[ExtractedSbom]) -> Result<String, ReportError> {
        self.render(&ExtractionJson {
            generated_at: Utc::now().to_rfc3339(),
            documents: sboms.iter().map(DocumentEntry::from_extracted).collect(),
        })
    }

    fn generate_audit_report(
        &self,
        sbom: &ExtractedSbom,
        audit: &AuditReport,
    ) -> Result<String, ReportError> {
        self.render(&AuditJson {
            source: sbom.source.display().to_string(),
            format: sbom.result.format,
            generated_at: Utc::now().to_rfc3339(),
            os: &audit.os,
            packages: &audit.packages,
            vulnerability_count: audit.vulnerability_count,
            cvss_score: audit.cvss_score,
            reasons: &audit.reasons,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
