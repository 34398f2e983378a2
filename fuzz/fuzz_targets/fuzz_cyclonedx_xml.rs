#![no_main]
use libfuzzer_sys::fuzz_target;
use vulners_sbom::parsers::parse_xml_tree;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the XML tree builder and CycloneDX XML extraction.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_xml_tree(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(
                r#"<bom xmlns="http://cyclonedx.org/schema/bom/1.4"><components>{s}</components></bom>"#
            );
            if let Ok(root) = parse_xml_tree(&wrapped) {
                let _ = vulners_sbom::extract_packages(&vulners_sbom::SbomDocument::from(&root));
            }
        }
    }
});
