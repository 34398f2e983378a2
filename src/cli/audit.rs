//! Audit command handler.
//!
//! Implements the `audit` subcommand: extract packages from one SBOM and
//! check them against the Vulners OS audit API.

use crate::audit::VulnersClient;
use crate::config::AppConfig;
use crate::error::OptionContext;
use crate::pipeline::{
    audit_sbom, exit_codes, load_and_extract, should_use_color, write_output, OutputTarget,
};
use crate::reports::create_reporter_with_options;
use anyhow::Result;
use std::path::Path;

/// Run the audit command, returning the desired exit code.
///
/// Returns [`exit_codes::VULNS_FOUND`] when vulnerabilities are found and
/// `behavior.fail_on_vuln` is set.
pub fn run_audit(input: &Path, config: &AppConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let api_key = config
        .audit
        .api_key
        .clone()
        .context_none("No Vulners API key given. Use --api-key or set VULNERS_API_KEY")?;

    let sbom = load_and_extract(input, quiet)?;
    let client = VulnersClient::new(config.audit.client_config(), api_key)?;
    let audit = audit_sbom(&client, &sbom, quiet)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = create_reporter_with_options(
        config.output.format,
        should_use_color(config.output.no_color, &target),
    );
    let report = reporter.generate_audit_report(&sbom, &audit)?;
    write_output(&report, &target, quiet)?;

    if config.behavior.fail_on_vuln && audit.has_vulnerabilities() {
        if !quiet {
            tracing::info!("Vulnerabilities found, exiting with code 1");
        }
        return Ok(exit_codes::VULNS_FOUND);
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SbomToolError;

    #[test]
    fn test_run_audit_requires_api_key() {
        let config = AppConfig::default();
        let err = run_audit(Path::new("does-not-matter.json"), &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomToolError>(),
            Some(SbomToolError::Config(_))
        ));
    }

    #[test]
    fn test_run_audit_fails_before_network_on_unknown_format() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("unknown.json");
        std::fs::write(&input, r#"{"hello": "world"}"#).unwrap();

        let mut config = AppConfig::default();
        config.audit.api_key = Some("key".to_string());
        config.audit.api_base = "http://127.0.0.1:9".to_string();

        let err = run_audit(&input, &config).unwrap_err();
        assert!(format!("{err:#}").contains("unknown.json"));
    }
}
