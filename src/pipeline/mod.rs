//! Pipeline orchestration for SBOM operations.
//!
//! Shared load → extract → audit → report logic used by the CLI command
//! handlers.

#[cfg(feature = "audit")]
mod audit_stage;
mod extract;
mod output;
mod parse;

#[cfg(feature = "audit")]
pub use audit_stage::audit_sbom;
pub use extract::{extract_format, extract_packages, extract_with, ExtractionResult};
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{extract_batch, load_and_extract, ExtractedSbom};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no vulnerabilities found (or no `--fail-on-vuln`)
    pub const SUCCESS: i32 = 0;
    /// Vulnerabilities were found and `--fail-on-vuln` was given
    pub const VULNS_FOUND: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
