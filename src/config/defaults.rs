//! Default values for vulners-sbom configuration.

/// Base URL of the Vulners API
pub const DEFAULT_API_BASE: &str = "https://vulners.com";

/// Request timeout for audit calls, in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Retries for transient audit failures
pub const DEFAULT_API_MAX_RETRIES: u8 = 3;

/// Upper bound accepted for `audit.max_retries`; backoff doubles per retry
pub const MAX_API_RETRIES: u8 = 10;
