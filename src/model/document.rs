//! Borrowed views over a parsed SBOM document.

use super::XmlElement;
use serde_json::Value;

/// A parsed SBOM document, borrowed from the caller.
///
/// The representation kind (generic JSON tree or XML element tree) is the
/// first thing every format detector checks, so a JSON document can never be
/// mistaken for an XML one and vice versa.
#[derive(Debug, Clone, Copy)]
pub enum SbomDocument<'a> {
    /// Tree of mappings, sequences, and scalars decoded from JSON text
    Json(&'a Value),
    /// Root element of a parsed XML document
    Xml(&'a XmlElement),
}

impl<'a> SbomDocument<'a> {
    /// The document as a JSON mapping, if it is one
    #[must_use]
    pub fn as_json_object(&self) -> Option<&'a serde_json::Map<String, Value>> {
        match self {
            Self::Json(value) => value.as_object(),
            Self::Xml(_) => None,
        }
    }

    /// The document's root XML element, if it is an element tree
    #[must_use]
    pub const fn as_xml(&self) -> Option<&'a XmlElement> {
        match self {
            Self::Json(_) => None,
            Self::Xml(root) => Some(root),
        }
    }

    /// Short name of the representation kind
    #[must_use]
    pub const fn representation(&self) -> &'static str {
        match self {
            Self::Json(_) => "JSON",
            Self::Xml(_) => "XML",
        }
    }

    /// Top-level JSON array stored under `key`; empty when absent or not an array
    pub fn json_array(&self, key: &str) -> impl Iterator<Item = &'a Value> + 'a {
        self.as_json_object()
            .and_then(|obj| obj.get(key))
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
    }
}

impl<'a> From<&'a Value> for SbomDocument<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Json(value)
    }
}

impl<'a> From<&'a XmlElement> for SbomDocument<'a> {
    fn from(root: &'a XmlElement) -> Self {
        Self::Xml(root)
    }
}

/// One inventory entry inside a document, before field extraction.
#[derive(Debug, Clone, Copy)]
pub enum RawComponent<'a> {
    Json(&'a Value),
    Xml(&'a XmlElement),
}

impl<'a> RawComponent<'a> {
    /// String value stored under `key` in a JSON component
    #[must_use]
    pub fn json_str(&self, key: &str) -> Option<&'a str> {
        match self {
            Self::Json(value) => value.get(key).and_then(Value::as_str),
            Self::Xml(_) => None,
        }
    }

    /// The underlying JSON value, if any
    #[must_use]
    pub const fn as_json(&self) -> Option<&'a Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Xml(_) => None,
        }
    }

    /// The underlying XML element, if any
    #[must_use]
    pub const fn as_xml(&self) -> Option<&'a XmlElement> {
        match self {
            Self::Json(_) => None,
            Self::Xml(element) => Some(element),
        }
    }
}
