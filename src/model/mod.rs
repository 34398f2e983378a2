//! Data model shared by the parsers and the extraction pipeline.
//!
//! - [`SbomDocument`] / [`RawComponent`]: read-only views over a parsed document
//! - [`XmlElement`]: owned, namespace-resolved XML tree
//! - [`PackageIdentifier`] / [`OsIdentity`]: what extraction produces

mod document;
mod package;
mod xml;

pub use document::{RawComponent, SbomDocument};
pub use package::{OsIdentity, PackageIdentifier, UNKNOWN_OS_NAME};
pub use xml::XmlElement;
