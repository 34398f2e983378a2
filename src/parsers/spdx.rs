//! SPDX 2.2 JSON format.
//!
//! Packages live in the top-level `packages` array. Versions are stored under
//! `versionInfo`, and the purl is an entry in `externalRefs` with
//! `referenceType: "purl"`. SPDX has no dedicated OS record, so the OS is
//! taken from the first purl that carries a `distro=` qualifier.

use super::traits::{Components, SbomFormat};
use super::FormatKind;
use crate::model::{OsIdentity, RawComponent, SbomDocument};
use serde_json::Value;

/// Substring of `spdxVersion` that identifies a supported document
const SPDX_VERSION_MARKER: &str = "SPDX-2.2";

/// purl qualifier carrying the distribution identity
const DISTRO_QUALIFIER: &str = "distro=";

/// SPDX 2.2 JSON documents
#[derive(Debug, Default, Clone, Copy)]
pub struct SpdxJsonFormat;

impl SpdxJsonFormat {
    /// Parse the `distro=<name>-<version>` qualifier of a purl
    fn distro_from_purl(purl: &str) -> Option<OsIdentity> {
        let (_, after) = purl.split_once(DISTRO_QUALIFIER)?;
        let value = after.split(['&', '#']).next().unwrap_or_default();
        if value.is_empty() {
            return None;
        }

        Some(match value.split_once('-') {
            Some((name, version)) => OsIdentity::new(name, version),
            None => OsIdentity::new(value, ""),
        })
    }
}

impl SbomFormat for SpdxJsonFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::SpdxJson
    }

    fn detect(&self, document: &SbomDocument<'_>) -> bool {
        let Some(obj) = document.as_json_object() else {
            return false;
        };
        obj.get("spdxVersion")
            .and_then(Value::as_str)
            .is_some_and(|version| version.contains(SPDX_VERSION_MARKER))
    }

    fn components<'a>(&self, document: &SbomDocument<'a>) -> Components<'a> {
        Box::new(document.json_array("packages").map(RawComponent::Json))
    }

    fn version<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component.json_str("versionInfo")
    }

    fn purl<'a>(&self, component: &RawComponent<'a>) -> Option<&'a str> {
        component
            .as_json()?
            .get("externalRefs")?
            .as_array()?
            .iter()
            .find(|ext_ref| ext_ref.get("referenceType").and_then(Value::as_str) == Some("purl"))?
            .get("referenceLocator")?
            .as_str()
    }

    fn locate_os(&self, document: &SbomDocument<'_>) -> Option<OsIdentity> {
        self.components(document)
            .filter_map(|component| self.purl(&component))
            .find_map(Self::distro_from_purl)
    }
}
