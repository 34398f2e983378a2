//! Property-based tests for document loading, dispatch and purl decoding.
//!
//! Ensures none of them panic on arbitrary input, and that the purl decoder's
//! output follows the ecosystem templates for well-formed purls.

use proptest::prelude::*;
use vulners_sbom::parsers::{parse_document_str, FormatDetector, PurlDecoder, Representation};
use vulners_sbom::{extract_packages, PackageIdentifier};

proptest! {
    // Parser tests intentionally only assert no-panic (not result correctness)
    // since random input is expected to produce Err in almost all cases.
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_document_str_doesnt_panic(s in "\\PC{0,2000}") {
        if let Ok(loaded) = parse_document_str(&s, None) {
            let _ = extract_packages(&loaded.as_document());
        }
    }

    #[test]
    fn json_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"\{[^\}]{0,500}\}"#).unwrap()
    ) {
        if let Ok(loaded) = parse_document_str(&s, Some(Representation::Json)) {
            let _ = FormatDetector::new().matching(&loaded.as_document());
        }
    }

    #[test]
    fn xml_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"<[a-z]{1,20}( xmlns="[a-z:/.0-9]{0,40}")?>[^<]{0,200}</[a-z]{1,20}>"#).unwrap()
    ) {
        if let Ok(loaded) = parse_document_str(&s, Some(Representation::Xml)) {
            let _ = extract_packages(&loaded.as_document());
        }
    }

    #[test]
    fn empty_and_whitespace_doesnt_panic(s in "\\s{0,100}") {
        prop_assert!(parse_document_str(&s, None).is_err());
    }

    #[test]
    fn cyclonedx_components_dont_panic(
        kind in "(library|operating-system|file|)",
        name in "\\PC{0,40}",
        purl in "\\PC{0,120}",
    ) {
        let doc = serde_json::json!({
            "bomFormat": "CycloneDX",
            "components": [{"type": kind, "name": name, "version": "1", "purl": purl}]
        });
        let result = extract_packages(&vulners_sbom::SbomDocument::from(&doc));
        prop_assert!(result.is_ok());
    }

    #[test]
    fn purl_decoder_doesnt_panic(purl in "\\PC{0,300}") {
        let _ = PurlDecoder::new().decode(&purl);
    }

    #[test]
    fn deb_purls_render_with_spaces(
        name in "[a-z][a-z0-9.+-]{0,30}",
        version in "[0-9][A-Za-z0-9.:~+-]{0,20}",
        arch in "(amd64|arm64|i386|all)",
        tail in "(|&distro=debian-11|#frag)",
    ) {
        let package = PackageIdentifier::new(
            name.clone(),
            version.clone(),
            format!("pkg:deb/debian/{name}@{version}?arch={arch}{tail}"),
        );
        let rendered = PurlDecoder::new().render(&package).unwrap();
        prop_assert_eq!(rendered, format!("{name} {version} {arch}"));
    }

    #[test]
    fn rpm_purls_render_with_dots(
        name in "[a-z][a-z0-9_+-]{0,30}",
        version in "[0-9][A-Za-z0-9._:~+-]{0,20}",
        arch in "(x86_64|aarch64|noarch)",
    ) {
        let package = PackageIdentifier::new(
            name.clone(),
            version.clone(),
            format!("pkg:rpm/fedora/{name}@{version}?arch={arch}&distro=fedora-38"),
        );
        let rendered = PurlDecoder::new().render(&package).unwrap();
        prop_assert_eq!(rendered, format!("{name}-{version}.{arch}"));
    }
}
