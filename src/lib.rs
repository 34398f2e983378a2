//! **Package extraction and vulnerability audit for Linux SBOMs.**
//!
//! `vulners-sbom` reads a Software Bill of Materials, works out which of the
//! supported flavours it is, and produces the list of OS packages it
//! describes together with the operating system they belong to. The package
//! list is in the form the Vulners OS audit API expects, so it can be
//! submitted as-is.
//!
//! Supported inputs:
//!
//! - **SPDX 2.2** JSON
//! - **Syft** JSON
//! - **CycloneDX** JSON and XML (1.4 namespace)
//!
//! Only `deb` and `rpm` package URLs produce packages; everything else in the
//! document is skipped.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Borrowed views over a parsed document ([`SbomDocument`],
//!   [`RawComponent`]), the owned XML element tree, and the extraction
//!   outputs ([`PackageIdentifier`], [`OsIdentity`]).
//! - **[`parsers`]**: The [`SbomFormat`] trait and its four implementations,
//!   the ordered format registry ([`FormatKind`], [`FormatDetector`]), the
//!   purl decoder and document loading.
//! - **[`pipeline`]**: Extraction over one document or many files, the
//!   audit stage and output handling.
//! - **[`audit`]**: The Vulners API client. The HTTP client requires the
//!   `audit` feature (on by default).
//! - **[`reports`]**: Summary table and JSON rendering.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use vulners_sbom::pipeline::load_and_extract;
//!
//! fn main() -> anyhow::Result<()> {
//!     let extracted = load_and_extract(Path::new("sbom.json"), true)?;
//!
//!     println!("{} on {}", extracted.result.format, extracted.result.os);
//!     for package in &extracted.result.packages {
//!         println!("  {package}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Documents already in memory go through [`extract_packages`]:
//!
//! ```
//! use vulners_sbom::{extract_packages, SbomDocument};
//!
//! let value = serde_json::json!({
//!     "bomFormat": "CycloneDX",
//!     "components": [{
//!         "type": "library", "name": "curl", "version": "7.64.0",
//!         "purl": "pkg:deb/debian/curl@7.64.0?arch=amd64&distro=debian-10"
//!     }]
//! });
//! let result = extract_packages(&SbomDocument::from(&value)).unwrap();
//! assert_eq!(result.packages, vec!["curl 7.64.0 amd64"]);
//! ```
//!
//! ## Feature Flags
//!
//! - `audit` (default): the blocking `reqwest` client for the Vulners API
//!   and the `audit` subcommand.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AuditConfig, BehaviorConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, OptionContext, Result, SbomToolError};
pub use model::{OsIdentity, PackageIdentifier, RawComponent, SbomDocument, XmlElement};
pub use parsers::{
    load_document, parse_document_str, FormatDetector, FormatKind, ParseError, PurlDecoder,
    SbomFormat,
};
pub use pipeline::{extract_packages, load_and_extract, ExtractionResult};
pub use reports::{ReportFormat, ReportGenerator};
