//! Configuration types for vulners-sbom operations.

use super::defaults::{DEFAULT_API_BASE, DEFAULT_API_MAX_RETRIES, DEFAULT_API_TIMEOUT_SECS};
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// Every section is defaulted, so a config file only needs the keys it
/// changes. CLI arguments are layered on top with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vulners API access
    pub audit: AuditConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Vulners API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Base URL of the API
    pub api_base: String,
    /// API key; usually supplied through `VULNERS_API_KEY` instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for transient failures
    pub max_retries: u8,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            max_retries: DEFAULT_API_MAX_RETRIES,
        }
    }
}

#[cfg(feature = "audit")]
impl AuditConfig {
    /// HTTP client settings for these values
    #[must_use]
    pub fn client_config(&self) -> crate::audit::AuditClientConfig {
        crate::audit::AuditClientConfig {
            api_base: self.api_base.clone(),
            timeout: std::time::Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 if the audit finds vulnerabilities
    pub fail_on_vuln: bool,
}

/// Values given explicitly on the command line.
///
/// `None` means the flag was not passed, so the file (or default) value
/// stays. Boolean switches can only turn a setting on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub quiet: bool,
    pub no_color: bool,
    pub fail_on_vuln: bool,
}
