//! Integration tests for vulners-sbom.
//!
//! These tests load the sample documents under `tests/fixtures/` and check
//! detection, extraction and OS resolution end to end.

use std::path::{Path, PathBuf};
use vulners_sbom::parsers::{load_document, FormatDetector, FormatKind, ParseError};
use vulners_sbom::pipeline::{extract_batch, load_and_extract};
use vulners_sbom::{extract_packages, OsIdentity};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(relative: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(relative)
}

const POSITIVE_FIXTURES: &[(&str, FormatKind)] = &[
    ("spdx/ubuntu.spdx.json", FormatKind::SpdxJson),
    ("syft/debian.syft.json", FormatKind::SyftJson),
    ("cyclonedx/debian.cdx.json", FormatKind::CycloneDxJson),
    ("cyclonedx/centos.cdx.xml", FormatKind::CycloneDxXml),
];

// ============================================================================
// Detection
// ============================================================================

mod detection_tests {
    use super::*;

    #[test]
    fn test_each_fixture_matches_exactly_one_format() {
        let detector = FormatDetector::new();
        for (relative, expected) in POSITIVE_FIXTURES {
            let loaded = load_document(&fixture_path(relative))
                .unwrap_or_else(|e| panic!("failed to load {relative}: {e}"));
            let matching = detector.matching(&loaded.as_document());
            assert_eq!(matching, vec![*expected], "{relative}");
        }
    }

    #[test]
    fn test_negative_fixtures_match_nothing() {
        let detector = FormatDetector::new();
        for relative in [
            "negative/spdx-2.3.json",
            "negative/unknown.json",
            "negative/cyclonedx-1.5.xml",
        ] {
            let loaded = load_document(&fixture_path(relative)).unwrap();
            assert!(
                detector.matching(&loaded.as_document()).is_empty(),
                "{relative} should not be recognised"
            );
        }
    }

    #[test]
    fn test_unrecognised_document_names_accepted_formats() {
        let loaded = load_document(&fixture_path("negative/unknown.json")).unwrap();
        let err = extract_packages(&loaded.as_document()).unwrap_err();
        match err {
            ParseError::UnknownFormat(message) => {
                assert!(message.contains("CycloneDX json or xml, SPDX json or Syft json"));
            }
            other => panic!("Expected UnknownFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_json_is_a_load_error() {
        let err = load_document(&fixture_path("negative/truncated.json")).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_document(&fixture_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, ParseError::IoError(_)));
    }
}

// ============================================================================
// Extraction
// ============================================================================

mod extraction_tests {
    use super::*;

    #[test]
    fn test_spdx_extraction() {
        let extracted = load_and_extract(&fixture_path("spdx/ubuntu.spdx.json"), true).unwrap();
        let result = extracted.result;

        assert_eq!(result.format, FormatKind::SpdxJson);
        assert_eq!(
            result.packages,
            vec![
                "adduser 3.118ubuntu2 all",
                "libc6 2.31-0ubuntu9.7 amd64",
                "zlib1g 1:1.2.11.dfsg-2ubuntu1.2 amd64",
            ]
        );
        // base-files has no purl, six is a pypi package
        assert_eq!(result.skipped, 2);
        assert_eq!(result.os, OsIdentity::new("ubuntu", "20.04"));
    }

    #[test]
    fn test_syft_extraction() {
        let extracted = load_and_extract(&fixture_path("syft/debian.syft.json"), true).unwrap();
        let result = extracted.result;

        assert_eq!(result.format, FormatKind::SyftJson);
        assert_eq!(
            result.packages,
            vec!["bash 5.0-4 amd64", "libcurl4 7.64.0-4+deb10u2 amd64"]
        );
        assert_eq!(result.skipped, 2);
        assert_eq!(result.os, OsIdentity::new("debian", "10"));
    }

    #[test]
    fn test_cyclonedx_json_extraction() {
        let extracted =
            load_and_extract(&fixture_path("cyclonedx/debian.cdx.json"), true).unwrap();
        let result = extracted.result;

        assert_eq!(result.format, FormatKind::CycloneDxJson);
        assert_eq!(
            result.packages,
            vec![
                "curl 7.64.0-4+deb10u2 amd64",
                "openssl 1.1.1d-0+deb10u7 amd64"
            ]
        );
        // Only library components are candidates; the pypi one is dropped
        assert_eq!(result.skipped, 1);
        assert_eq!(result.os, OsIdentity::new("debian", "10"));
    }

    #[test]
    fn test_cyclonedx_xml_extraction() {
        let extracted =
            load_and_extract(&fixture_path("cyclonedx/centos.cdx.xml"), true).unwrap();
        let result = extracted.result;

        assert_eq!(result.format, FormatKind::CycloneDxXml);
        assert_eq!(
            result.packages,
            vec![
                "bash-4.4.19-12.el8.x86_64",
                "openssl-libs-1:1.1.1g-15.el8_3.x86_64"
            ]
        );
        assert_eq!(result.skipped, 1);
        assert_eq!(result.os, OsIdentity::new("centos", "8"));
    }

    #[test]
    fn test_batch_extraction_keeps_input_order() {
        let mut paths: Vec<PathBuf> = POSITIVE_FIXTURES
            .iter()
            .map(|(relative, _)| fixture_path(relative))
            .collect();
        paths.push(fixture_path("negative/unknown.json"));

        let results = extract_batch(&paths, true);
        assert_eq!(results.len(), paths.len());

        for ((_, expected), result) in POSITIVE_FIXTURES.iter().zip(&results) {
            assert_eq!(result.as_ref().unwrap().result.format, *expected);
        }
        let failure = results.last().unwrap().as_ref().unwrap_err();
        assert!(format!("{failure:#}").contains("unknown.json"));
    }

    #[test]
    fn test_packages_never_contain_unsupported_ecosystems() {
        for (relative, _) in POSITIVE_FIXTURES {
            let extracted = load_and_extract(&fixture_path(relative), true).unwrap();
            for package in &extracted.result.packages {
                assert!(!package.contains("pkg:"), "{package}");
                assert!(!package.contains("lodash") && !package.contains("requests"));
            }
        }
    }
}
