//! Format capability trait and parse error types.
//!
//! Each supported SBOM flavour implements [`SbomFormat`]: a detection
//! predicate, a component enumerator, per-component field accessors, and an
//! OS resolver. The default accessors read the `name`/`version`/`purl` keys of
//! a JSON mapping; formats that store these elsewhere override them.

use super::FormatKind;
use crate::model::{OsIdentity, PackageIdentifier, RawComponent, SbomDocument};
use thiserror::Error;

/// Errors that can occur while loading or extracting an SBOM
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("XML parse error: {0}")]
    XmlError(String),

    #[error("Unknown SBOM format: {0}")]
    UnknownFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Malformed PURL: {purl} - {reason}")]
    InvalidPurl { purl: String, reason: String },
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlError(err.to_string())
    }
}

/// Lazily evaluated sequence of raw components borrowed from a document
pub type Components<'a> = Box<dyn Iterator<Item = RawComponent<'a>> + 'a>;

/// Capabilities every SBOM format variant provides.
///
/// Implementations are stateless unit structs registered in [`FormatKind::ALL`],
/// so they can be shared freely between threads.
pub trait SbomFormat: Send + Sync {
    /// Registry entry for this format
    fn kind(&self) -> FormatKind;

    /// Check whether the document is in this format.
    ///
    /// Implementations check the representation kind before looking at any
    /// format marker.
    fn detect(&self, document: &SbomDocument<'_>) -> bool;

    /// Enumerate the document's package components.
    ///
    /// The sequence is re-derived from the document on every call.
    fn components<'a>(&self, document: &SbomDocument<'a>) -> Components<'a>;

    /// Package name of a component
    fn name<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component.json_str("name")
    }

    /// Package version of a component
    fn version<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component.json_str("version")
    }

    /// Package URL of a component
    fn purl<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component.json_str("purl")
    }

    /// Collect name, version, and purl of a component.
    ///
    /// Fails with [`ParseError::MissingField`] when any of them is absent.
    fn identify(&self, component: &RawComponent<'_>) -> Result<PackageIdentifier, ParseError> {
        let name = self
            .name(component)
            .ok_or_else(|| ParseError::MissingField("name".to_string()))?;
        let version = self
            .version(component)
            .ok_or_else(|| ParseError::MissingField(format!("version of '{name}'")))?;
        let purl = self
            .purl(component)
            .ok_or_else(|| ParseError::MissingField(format!("purl of '{name}'")))?;
        Ok(PackageIdentifier::new(name, version, purl))
    }

    /// Format-specific OS lookup; `None` when the document carries no marker
    fn locate_os(&self, _document: &SbomDocument<'_>) -> Option<OsIdentity> {
        None
    }

    /// OS identity of the document, falling back to `{"Unknown", ""}`
    fn resolve_os(&self, document: &SbomDocument<'_>) -> OsIdentity {
        self.locate_os(document).unwrap_or_else(|| {
            tracing::debug!("No OS marker in {} document", self.kind().name());
            OsIdentity::unknown()
        })
    }
}
