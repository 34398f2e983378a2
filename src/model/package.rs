//! Package and operating-system identities produced by extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name, version, and purl pulled out of one raw component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentifier {
    pub name: String,
    pub version: String,
    pub purl: String,
}

impl PackageIdentifier {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        purl: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            purl: purl.into(),
        }
    }
}

/// Operating system the SBOM describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsIdentity {
    pub name: String,
    pub version: String,
}

/// Name reported when no OS marker is present in the document
pub const UNKNOWN_OS_NAME: &str = "Unknown";

impl OsIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The fallback identity, `{"Unknown", ""}`
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_OS_NAME, "")
    }

    /// Whether this is the fallback identity
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_OS_NAME && self.version.is_empty()
    }
}

impl Default for OsIdentity {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for OsIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_os_is_unknown() {
        let os = OsIdentity::default();
        assert_eq!(os.name, "Unknown");
        assert_eq!(os.version, "");
        assert!(os.is_unknown());
    }

    #[test]
    fn test_os_display() {
        assert_eq!(OsIdentity::new("debian", "10").to_string(), "debian 10");
        assert_eq!(OsIdentity::unknown().to_string(), "Unknown");
    }
}
