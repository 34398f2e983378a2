//! Loading SBOM files into owned document trees.
//!
//! JSON text is decoded into a generic [`serde_json::Value`]; XML text is
//! read with a namespace-resolving `quick-xml` reader into an [`XmlElement`]
//! tree. The representation is chosen from the file extension, falling back
//! to the first significant character of the content.

use super::traits::ParseError;
use crate::model::{SbomDocument, XmlElement};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use serde_json::Value;
use std::path::Path;

/// Maximum SBOM file size (512 MB)
const MAX_SBOM_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Textual encoding of an SBOM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Xml,
}

impl Representation {
    /// Guess from the file extension (`.json` / `.xml`, case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Guess from the first non-whitespace character of the content
    #[must_use]
    pub fn sniff(content: &str) -> Option<Self> {
        match content.trim_start_matches('\u{feff}').trim_start().chars().next()? {
            '{' | '[' => Some(Self::Json),
            '<' => Some(Self::Xml),
            _ => None,
        }
    }
}

/// An SBOM document owned by the caller.
#[derive(Debug, Clone)]
pub enum LoadedDocument {
    Json(Value),
    Xml(XmlElement),
}

impl LoadedDocument {
    /// Borrow the document for detection and extraction
    #[must_use]
    pub const fn as_document(&self) -> SbomDocument<'_> {
        match self {
            Self::Json(value) => SbomDocument::Json(value),
            Self::Xml(root) => SbomDocument::Xml(root),
        }
    }
}

/// Read and parse an SBOM file.
///
/// Returns an error if the file exceeds 512 MB.
pub fn load_document(path: &Path) -> Result<LoadedDocument, ParseError> {
    let metadata = std::fs::metadata(path).map_err(|e| ParseError::IoError(e.to_string()))?;
    if metadata.len() > MAX_SBOM_FILE_SIZE {
        return Err(ParseError::IoError(format!(
            "SBOM file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_SBOM_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_document_str(&content, Representation::from_path(path))
}

/// Parse SBOM text, using `hint` when given and content sniffing otherwise
pub fn parse_document_str(
    content: &str,
    hint: Option<Representation>,
) -> Result<LoadedDocument, ParseError> {
    let content = content.trim_start_matches('\u{feff}');
    let representation = hint.or_else(|| Representation::sniff(content)).ok_or_else(|| {
        ParseError::UnknownFormat("content is neither JSON nor XML".to_string())
    })?;

    match representation {
        Representation::Json => Ok(LoadedDocument::Json(serde_json::from_str(content)?)),
        Representation::Xml => Ok(LoadedDocument::Xml(parse_xml_tree(content)?)),
    }
}

/// Build an owned element tree from XML text
pub fn parse_xml_tree(content: &str) -> Result<XmlElement, ParseError> {
    let mut reader = NsReader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(ParseError::XmlError(format!(
                    "unknown namespace prefix '{}'",
                    String::from_utf8_lossy(&prefix)
                )));
            }
        };

        match event {
            Event::Start(start) => stack.push(element_from_start(namespace, &start)?),
            Event::Empty(start) => {
                let element = element_from_start(namespace, &start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ParseError::XmlError("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    append_text(current, &text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    append_text(current, &String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::XmlError(format!(
            "unclosed element <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| ParseError::XmlError("document has no root element".to_string()))
}

fn element_from_start(
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<XmlElement, ParseError> {
    let mut element = XmlElement {
        namespace,
        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        ..XmlElement::default()
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::XmlError(e.to_string()))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

/// Attach a completed element to its parent, or make it the root
fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), ParseError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(ParseError::XmlError("multiple root elements".to_string()))
    }
}

fn append_text(element: &mut XmlElement, text: &str) {
    if text.is_empty() {
        return;
    }
    match &mut element.text {
        Some(existing) => existing.push_str(text),
        None => element.text = Some(text.to_string()),
    }
}
