//! Package extraction: dispatch, component enumeration, purl rendering, and
//! OS resolution for a single parsed document.

use crate::model::{OsIdentity, SbomDocument};
use crate::parsers::{FormatDetector, FormatKind, ParseError, PurlDecoder, SbomFormat};
use serde::Serialize;

/// Packages and OS identity extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Format the document was recognised as
    pub format: FormatKind,
    /// Canonical package strings, in document order
    pub packages: Vec<String>,
    /// OS the document describes, or `{"Unknown", ""}`
    pub os: OsIdentity,
    /// Components dropped for a missing field or an undecodable purl
    #[serde(skip)]
    pub skipped: usize,
}

impl ExtractionResult {
    /// Whether any packages were extracted
    #[must_use]
    pub fn has_packages(&self) -> bool {
        !self.packages.is_empty()
    }
}

/// Extract packages and OS identity using every registered format.
///
/// Fails only when no format recognises the document. Components with missing
/// fields or purls outside the supported ecosystems are skipped.
pub fn extract_packages(document: &SbomDocument<'_>) -> Result<ExtractionResult, ParseError> {
    extract_with(&FormatDetector::new(), document)
}

/// Extract packages using a specific detector
pub fn extract_with(
    detector: &FormatDetector,
    document: &SbomDocument<'_>,
) -> Result<ExtractionResult, ParseError> {
    let format = detector.dispatch(document)?;
    Ok(extract_format(format, document))
}

/// Run component extraction and OS resolution for an already selected format
#[must_use]
pub fn extract_format(format: &dyn SbomFormat, document: &SbomDocument<'_>) -> ExtractionResult {
    let decoder = PurlDecoder::new();
    let mut packages = Vec::new();
    let mut skipped = 0;

    for component in format.components(document) {
        match format
            .identify(&component)
            .and_then(|package| decoder.render(&package))
        {
            Ok(package) => packages.push(package),
            Err(e) => {
                tracing::trace!("Skipping component: {}", e);
                skipped += 1;
            }
        }
    }

    let os = format.resolve_os(document);
    tracing::debug!(
        "{}: {} packages, {} components skipped, OS {}",
        format.kind(),
        packages.len(),
        skipped,
        os
    );

    ExtractionResult {
        format: format.kind(),
        packages,
        os,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::XmlElement;
    use serde_json::json;

    #[test]
    fn test_unsupported_and_malformed_components_are_dropped() {
        let doc = json!({
            "bomFormat": "CycloneDX",
            "components": [
                {"type": "library", "name": "curl", "version": "7.64.0",
                 "purl": "pkg:deb/debian/curl@7.64.0?arch=amd64&distro=debian-10"},
                {"type": "library", "name": "requests", "version": "2.31.0",
                 "purl": "pkg:pypi/requests@2.31.0"},
                {"type": "library", "name": "noarch", "version": "1.0",
                 "purl": "pkg:deb/debian/noarch@1.0?distro=debian-10"},
                {"type": "library", "name": "nopurl", "version": "1.0"},
                {"type": "library", "name": "bash", "version": "5.0",
                 "purl": "pkg:rpm/fedora/bash@5.0?arch=x86_64&"}
            ]
        });

        let result = extract_packages(&SbomDocument::from(&doc)).unwrap();
        assert_eq!(result.format, FormatKind::CycloneDxJson);
        assert_eq!(result.packages, vec!["curl 7.64.0 amd64", "bash-5.0.x86_64"]);
        assert_eq!(result.skipped, 3);
        assert!(result.os.is_unknown());
    }

    #[test]
    fn test_unrecognised_document_produces_no_output() {
        let doc = json!({"some": "random", "json": "content"});
        let err = extract_packages(&SbomDocument::from(&doc)).unwrap_err();
        assert!(matches!(err, ParseError::UnknownFormat(_)));

        let xml = XmlElement::new(Some("urn:other"), "bom");
        assert!(extract_packages(&SbomDocument::from(&xml)).is_err());
    }

    #[test]
    fn test_empty_document_is_not_an_error() {
        let doc = json!({"spdxVersion": "SPDX-2.2", "packages": []});
        let result = extract_packages(&SbomDocument::from(&doc)).unwrap();
        assert!(!result.has_packages());
        assert!(result.os.is_unknown());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = json!({
            "spdxVersion": "SPDX-2.2",
            "packages": [{
                "name": "zlib1g", "versionInfo": "1:1.2.11",
                "externalRefs": [{"referenceType": "purl",
                    "referenceLocator": "pkg:deb/ubuntu/zlib1g@1:1.2.11?arch=amd64&distro=ubuntu-20.04"}]
            }]
        });
        let sbom = SbomDocument::from(&doc);
        let first = extract_packages(&sbom).unwrap();
        let second = extract_packages(&sbom).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.os, OsIdentity::new("ubuntu", "20.04"));
    }
}
