//! Audit stage: submit extracted packages to the Vulners API.

use super::ExtractedSbom;
use crate::audit::{AuditReport, VulnersClient};
use anyhow::{Context, Result};

/// Audit the packages of one extracted document.
///
/// Documents without any supported package are not sent; an empty report
/// is returned instead.
pub fn audit_sbom(client: &VulnersClient, sbom: &ExtractedSbom, quiet: bool) -> Result<AuditReport> {
    let result = &sbom.result;

    if !result.has_packages() {
        tracing::warn!(
            "No supported packages found in {}, skipping audit",
            sbom.source.display()
        );
        return Ok(AuditReport::empty(result.os.clone()));
    }

    if !quiet {
        tracing::info!(
            "Auditing {} packages for operating system {}",
            result.packages.len(),
            result.os
        );
    }

    let report = client
        .os_audit(&result.os, &result.packages)
        .with_context(|| format!("Audit of {} failed", sbom.source.display()))?;

    if !quiet {
        tracing::info!("Found {} vulnerabilities", report.vulnerability_count);
    }
    Ok(report)
}
