//! Vulnerability audit against the Vulners API.
//!
//! Extracted package lists are submitted together with the document's
//! operating system. The HTTP client requires the `audit` feature; the
//! request and report types are always available.

#[cfg(feature = "audit")]
mod client;
mod response;

#[cfg(feature = "audit")]
pub use client::{AuditClientConfig, VulnersClient};
pub use response::{parse_audit_response, AuditReason, CvssSummary, OsAuditData, OsAuditRequest};

use crate::model::OsIdentity;
use serde::Serialize;

/// Outcome of one OS audit.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Operating system the packages were audited against
    pub os: OsIdentity,
    /// Packages that were submitted
    pub packages: Vec<String>,
    /// Number of distinct bulletins reported
    pub vulnerability_count: usize,
    pub vulnerabilities: Vec<String>,
    pub reasons: Vec<AuditReason>,
    /// Highest CVSS score, when the API reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<f64>,
}

impl AuditReport {
    /// Build a report from a decoded API payload
    #[must_use]
    pub fn new(os: OsIdentity, packages: Vec<String>, data: OsAuditData) -> Self {
        Self {
            os,
            packages,
            vulnerability_count: data.vulnerabilities.len(),
            vulnerabilities: data.vulnerabilities,
            reasons: data.reasons,
            cvss_score: data.cvss.map(|cvss| cvss.score),
        }
    }

    /// Report for an audit that was not sent because there was nothing to check
    #[must_use]
    pub fn empty(os: OsIdentity) -> Self {
        Self {
            os,
            packages: Vec::new(),
            vulnerability_count: 0,
            vulnerabilities: Vec::new(),
            reasons: Vec::new(),
            cvss_score: None,
        }
    }

    /// Whether any vulnerabilities were found
    #[must_use]
    pub fn has_vulnerabilities(&self) -> bool {
        self.vulnerability_count > 0
    }
}
