#![no_main]
use libfuzzer_sys::fuzz_target;
use vulners_sbom::parsers::parse_document_str;

/// Fuzz document loading and the full extraction pipeline.
///
/// Feeds arbitrary UTF-8 strings through content sniffing, the JSON or XML
/// loader, format dispatch and extraction.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(loaded) = parse_document_str(s, None) {
            let _ = vulners_sbom::extract_packages(&loaded.as_document());
        }
    }
});
