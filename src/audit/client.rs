//! Vulners API HTTP client.

use super::response::{api_error, parse_audit_response, OsAuditData, OsAuditRequest};
use super::AuditReport;
use crate::config::{
    DEFAULT_API_BASE, DEFAULT_API_MAX_RETRIES, DEFAULT_API_TIMEOUT_SECS, MAX_API_RETRIES,
};
use crate::error::{AuditErrorKind, ErrorContext, Result, SbomToolError};
use crate::model::OsIdentity;
use reqwest::blocking::Client;
use std::time::Duration;

/// Path of the OS audit endpoint, relative to the API base
const OS_AUDIT_PATH: &str = "/api/v3/audit/audit/";

/// Vulners client configuration.
#[derive(Debug, Clone)]
pub struct AuditClientConfig {
    /// Base URL for the Vulners API
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retries for failed requests
    pub max_retries: u8,
}

impl Default for AuditClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            max_retries: DEFAULT_API_MAX_RETRIES,
        }
    }
}

/// HTTP client for the Vulners audit API.
pub struct VulnersClient {
    client: Client,
    config: AuditClientConfig,
    api_key: String,
}

/// Backoff before retry `attempt` (1-based): 1s, 2s, 4s, ...
fn retry_delay(attempt: u8) -> Duration {
    let exponent = u32::from(attempt.saturating_sub(1));
    Duration::from_secs(1u64.checked_shl(exponent).unwrap_or(u64::MAX))
}

/// A failed attempt and whether it is worth repeating
struct AttemptError {
    error: SbomToolError,
    retryable: bool,
}

fn network_error(msg: &str, err: reqwest::Error) -> SbomToolError {
    SbomToolError::audit(msg, AuditErrorKind::NetworkError(err.to_string()))
}

impl VulnersClient {
    /// Create a new client; the API key must not be empty.
    ///
    /// `max_retries` is capped at [`MAX_API_RETRIES`].
    pub fn new(mut config: AuditClientConfig, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SbomToolError::audit(
                "creating client",
                AuditErrorKind::MissingApiKey,
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        if config.max_retries > MAX_API_RETRIES {
            tracing::warn!(
                "Capping audit retries at {} (requested {})",
                MAX_API_RETRIES,
                config.max_retries
            );
            config.max_retries = MAX_API_RETRIES;
        }

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Audit a package list for the given operating system.
    ///
    /// The OS identity and packages are sent exactly as extracted.
    pub fn os_audit(&self, os: &OsIdentity, packages: &[String]) -> Result<AuditReport> {
        let url = format!(
            "{}{}",
            self.config.api_base.trim_end_matches('/'),
            OS_AUDIT_PATH
        );
        let request = OsAuditRequest {
            os: os.name.clone(),
            version: os.version.clone(),
            package: packages.to_vec(),
            api_key: self.api_key.clone(),
        };

        tracing::debug!(
            "Auditing {} packages for {} via {}",
            packages.len(),
            os,
            url
        );
        let data = self
            .send_with_retries(&url, &request)
            .with_context(|| format!("OS audit for {os}"))?;
        Ok(AuditReport::new(os.clone(), packages.to_vec(), data))
    }

    /// Send a request, retrying transient failures with exponential backoff
    fn send_with_retries(&self, url: &str, request: &OsAuditRequest) -> Result<OsAuditData> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = retry_delay(attempt);
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            match self.send_audit_request(url, request) {
                Ok(data) => return Ok(data),
                Err(AttemptError {
                    error,
                    retryable: false,
                }) => return Err(error),
                Err(AttemptError { error, .. }) => {
                    tracing::debug!("Audit request attempt {} failed: {}", attempt + 1, error);
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| api_error("Unknown error")))
    }

    fn send_audit_request(
        &self,
        url: &str,
        request: &OsAuditRequest,
    ) -> std::result::Result<OsAuditData, AttemptError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .map_err(|e| AttemptError {
                error: network_error("Failed to send audit request", e),
                retryable: true,
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| AttemptError {
            error: network_error("Failed to read audit response", e),
            retryable: true,
        })?;

        if !status.is_success() {
            // Vulners reports most API errors in a JSON envelope, even on 4xx
            let error = match parse_audit_response(&body) {
                Err(e @ SbomToolError::Audit { source: AuditErrorKind::ApiError(_), .. }) => e,
                _ => api_error(format!(
                    "Vulners API returned error status {}",
                    status.as_u16()
                )),
            };
            return Err(AttemptError {
                error,
                retryable: status.is_server_error() || status.as_u16() == 429,
            });
        }

        parse_audit_response(&body).map_err(|error| AttemptError {
            error,
            retryable: false,
        })
    }
}
