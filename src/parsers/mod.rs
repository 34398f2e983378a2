//! SBOM format parsers.
//!
//! This module recognises four SBOM flavours and knows how to pull package
//! identifiers and the OS identity out of each:
//!
//! | Format | Representation | Marker |
//! |---|---|---|
//! | SPDX | JSON | `spdxVersion` contains `SPDX-2.2` |
//! | Syft | JSON | `schema.url` points at Syft's JSON schema |
//! | CycloneDX | JSON | `bomFormat` contains `CycloneDX` |
//! | CycloneDX | XML | root `bom` element in the 1.4 namespace |
//!
//! ## Usage
//!
//! ```no_run
//! use vulners_sbom::parsers::{load_document, FormatDetector};
//! use std::path::Path;
//!
//! let loaded = load_document(Path::new("sbom.json")).unwrap();
//! if let Some(kind) = FormatDetector::new().detect(&loaded.as_document()) {
//!     println!("Detected: {kind}");
//! }
//! ```

mod cyclonedx;
mod detection;
mod loader;
mod purl;
mod spdx;
mod syft;
mod traits;

pub use cyclonedx::{CycloneDxJsonFormat, CycloneDxXmlFormat, CYCLONEDX_NS};
pub use detection::{FormatDetector, FormatKind, SUPPORTED_FORMATS};
pub use loader::{load_document, parse_document_str, parse_xml_tree, LoadedDocument, Representation};
pub use purl::{DecodedPurl, Ecosystem, PurlDecoder};
pub use spdx::SpdxJsonFormat;
pub use syft::SyftJsonFormat;
pub use traits::{Components, ParseError, SbomFormat};
