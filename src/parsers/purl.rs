//! Package URL decoding into distro package strings.
//!
//! Only OS package ecosystems are rendered; the vulnerability audit expects
//! `dpkg`-style strings for Debian-family systems and NEVRA-style strings for
//! RPM-family systems. Everything else is filtered out.

use super::traits::ParseError;
use crate::model::PackageIdentifier;
use regex::Regex;
use std::sync::LazyLock;

/// The `arch` qualifier value runs until the next qualifier, subpath, or end of string
static ARCH_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"arch=([^&#]+)").expect("static regex"));

/// Ecosystems with a known canonical package string layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Deb,
    Rpm,
}

impl Ecosystem {
    /// Every supported ecosystem
    pub const ALL: [Self; 2] = [Self::Deb, Self::Rpm];

    /// Look up the ecosystem for a purl scheme such as `pkg:deb`
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|eco| eco.scheme() == scheme)
    }

    /// purl scheme prefix (`pkg:<type>`)
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::Deb => "pkg:deb",
            Self::Rpm => "pkg:rpm",
        }
    }

    /// Human-readable layout of the rendered string
    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Deb => "{name} {version} {arch}",
            Self::Rpm => "{name}-{version}.{arch}",
        }
    }

    /// Render a package string following [`Self::template`]
    #[must_use]
    pub fn render(&self, name: &str, version: &str, arch: &str) -> String {
        match self {
            Self::Deb => format!("{name} {version} {arch}"),
            Self::Rpm => format!("{name}-{version}.{arch}"),
        }
    }
}

/// The parts of a purl that decide how a package is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPurl {
    pub scheme: String,
    pub arch: String,
}

/// Decodes purls and renders canonical package strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct PurlDecoder;

impl PurlDecoder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Split a purl into its scheme and `arch` qualifier.
    ///
    /// Fails when the scheme has no ecosystem template or the purl carries
    /// no `arch=` qualifier.
    pub fn decode(&self, purl: &str) -> Result<DecodedPurl, ParseError> {
        let scheme = purl.split('/').next().unwrap_or_default();
        if Ecosystem::from_scheme(scheme).is_none() {
            return Err(ParseError::InvalidPurl {
                purl: purl.to_string(),
                reason: format!("unsupported package type '{scheme}'"),
            });
        }

        let arch = ARCH_QUALIFIER
            .captures(purl)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ParseError::InvalidPurl {
                purl: purl.to_string(),
                reason: "missing arch qualifier".to_string(),
            })?;

        Ok(DecodedPurl {
            scheme: scheme.to_string(),
            arch: arch.to_string(),
        })
    }

    /// Render the canonical package string for a package identifier
    pub fn render(&self, package: &PackageIdentifier) -> Result<String, ParseError> {
        let decoded = self.decode(&package.purl)?;
        let ecosystem = Ecosystem::from_scheme(&decoded.scheme).ok_or_else(|| {
            ParseError::InvalidPurl {
                purl: package.purl.clone(),
                reason: format!("unsupported package type '{}'", decoded.scheme),
            }
        })?;
        Ok(ecosystem.render(&package.name, &package.version, &decoded.arch))
    }
}
