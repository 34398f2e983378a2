#![no_main]
use libfuzzer_sys::fuzz_target;
use vulners_sbom::parsers::{parse_document_str, Representation};

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz CycloneDX JSON extraction.
///
/// Wraps input in a minimal CycloneDX envelope so most cases get past
/// format detection and into component and purl handling.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(r#"{{"bomFormat":"CycloneDX","specVersion":"1.4","components":[{s}]}}"#);
            if let Ok(loaded) = parse_document_str(&wrapped, Some(Representation::Json)) {
                let _ = vulners_sbom::extract_packages(&loaded.as_document());
            }
        }

        // Arbitrary purl strings inside an otherwise valid component
        let doc = serde_json::json!({
            "bomFormat": "CycloneDX",
            "components": [{"type": "library", "name": "fuzz", "version": "1", "purl": s}]
        });
        let _ = vulners_sbom::extract_packages(&vulners_sbom::SbomDocument::from(&doc));
    }
});
