//! CycloneDX formats.
//!
//! JSON documents are recognised by `bomFormat`, XML documents by a root
//! `bom` element in the CycloneDX 1.4 namespace. In both, package entries are
//! components of type `library` and the OS is the first component of type
//! `operating-system`.

use super::traits::{Components, SbomFormat};
use super::FormatKind;
use crate::model::{OsIdentity, RawComponent, SbomDocument, XmlElement};
use serde_json::Value;

/// CycloneDX 1.4 XML namespace
pub const CYCLONEDX_NS: &str = "http://cyclonedx.org/schema/bom/1.4";

/// Component type holding installable packages
const LIBRARY_TYPE: &str = "library";

/// Component type describing the operating system
const OS_TYPE: &str = "operating-system";

/// All JSON components, regardless of type
fn json_components<'a>(document: &SbomDocument<'a>) -> impl Iterator<Item = &'a Value> + 'a {
    document.json_array("components")
}

fn json_component_type(component: &Value) -> Option<&str> {
    component.get("type").and_then(Value::as_str)
}

/// All `bom:components/bom:component` elements, regardless of type
fn xml_components<'a>(document: &SbomDocument<'a>) -> impl Iterator<Item = &'a XmlElement> + 'a {
    document
        .as_xml()
        .and_then(|root| root.child(CYCLONEDX_NS, "components"))
        .into_iter()
        .flat_map(|components| components.children_named(CYCLONEDX_NS, "component"))
}

/// CycloneDX JSON documents
#[derive(Debug, Default, Clone, Copy)]
pub struct CycloneDxJsonFormat;

impl SbomFormat for CycloneDxJsonFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::CycloneDxJson
    }

    fn detect(&self, document: &SbomDocument<'_>) -> bool {
        let Some(obj) = document.as_json_object() else {
            return false;
        };
        obj.get("bomFormat")
            .and_then(Value::as_str)
            .is_some_and(|format| format.contains("CycloneDX"))
    }

    fn components<'a>(&self, document: &SbomDocument<'a>) -> Components<'a> {
        Box::new(
            json_components(document)
                .filter(|c| json_component_type(c) == Some(LIBRARY_TYPE))
                .map(RawComponent::Json),
        )
    }

    fn locate_os(&self, document: &SbomDocument<'_>) -> Option<OsIdentity> {
        let os = json_components(document).find(|c| json_component_type(c) == Some(OS_TYPE))?;
        let component = RawComponent::Json(os);
        Some(OsIdentity::new(
            self.name(&component)?,
            self.version(&component).unwrap_or_default(),
        ))
    }
}

/// CycloneDX 1.4 XML documents
#[derive(Debug, Default, Clone, Copy)]
pub struct CycloneDxXmlFormat;

impl SbomFormat for CycloneDxXmlFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::CycloneDxXml
    }

    fn detect(&self, document: &SbomDocument<'_>) -> bool {
        document
            .as_xml()
            .is_some_and(|root| root.is(CYCLONEDX_NS, "bom"))
    }

    fn components<'a>(&self, document: &SbomDocument<'a>) -> Components<'a> {
        Box::new(
            xml_components(document)
                .filter(|c| c.attribute("type") == Some(LIBRARY_TYPE))
                .map(RawComponent::Xml),
        )
    }

    fn name<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component.as_xml()?.child_text(CYCLONEDX_NS, "name")
    }

    fn version<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component.as_xml()?.child_text(CYCLONEDX_NS, "version")
    }

    fn purl<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component.as_xml()?.child_text(CYCLONEDX_NS, "purl")
    }

    fn locate_os(&self, document: &SbomDocument<'_>) -> Option<OsIdentity> {
        let os = xml_components(document).find(|c| c.attribute("type") == Some(OS_TYPE))?;
        let component = RawComponent::Xml(os);
        Some(OsIdentity::new(
            self.name(&component)?,
            self.version(&component).unwrap_or_default(),
        ))
    }
}
