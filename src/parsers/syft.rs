//! Syft native JSON format.
//!
//! Artifacts use the default `name`/`version`/`purl` keys. The scanned image's
//! OS is reported in a top-level `distro` object.

use super::traits::{Components, SbomFormat};
use super::FormatKind;
use crate::model::{OsIdentity, RawComponent, SbomDocument};
use serde_json::Value;

/// Substring of `schema.url` identifying Syft's JSON schema
const SYFT_SCHEMA_MARKER: &str = "anchore/syft/main/schema/json";

/// Syft JSON documents
#[derive(Debug, Default, Clone, Copy)]
pub struct SyftJsonFormat;

impl SbomFormat for SyftJsonFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::SyftJson
    }

    fn detect(&self, document: &SbomDocument<'_>) -> bool {
        let Some(obj) = document.as_json_object() else {
            return false;
        };
        obj.get("schema")
            .and_then(|schema| schema.get("url"))
            .and_then(Value::as_str)
            .is_some_and(|url| url.contains(SYFT_SCHEMA_MARKER))
    }

    fn components<'a>(&self, document: &SbomDocument<'a>) -> Components<'a> {
        Box::new(document.json_array("artifacts").map(RawComponent::Json))
    }

    fn locate_os(&self, document: &SbomDocument<'_>) -> Option<OsIdentity> {
        let distro = document.as_json_object()?.get("distro")?;
        let name = distro.get("name").and_then(Value::as_str)?;
        let version = distro
            .get("versionID")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Some(OsIdentity::new(name, version))
    }
}
