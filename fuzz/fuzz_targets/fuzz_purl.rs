#![no_main]
use libfuzzer_sys::fuzz_target;
use vulners_sbom::parsers::PurlDecoder;
use vulners_sbom::PackageIdentifier;

/// Fuzz purl decoding and package rendering.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let decoder = PurlDecoder::new();
        let _ = decoder.decode(s);
        let _ = decoder.render(&PackageIdentifier::new("fuzz", "1.0", s));
    }
});
