//! Vulners audit API request and response types.

use crate::error::{AuditErrorKind, Result, SbomToolError};
use serde::{Deserialize, Serialize};

/// Body of an OS audit request.
#[derive(Debug, Clone, Serialize)]
pub struct OsAuditRequest {
    pub os: String,
    pub version: String,
    /// Canonical package strings, forwarded unmodified
    pub package: Vec<String>,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// Response envelope shared by all Vulners API endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// `"OK"` on success, `"error"` otherwise
    pub result: String,
    pub data: T,
}

/// Error payload returned with `result: "error"`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorData {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, rename = "errorCode")]
    pub error_code: Option<i64>,
}

/// Payload of a successful OS audit.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OsAuditData {
    /// Bulletin identifiers affecting the submitted packages
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
    /// Per-package findings
    #[serde(default)]
    pub reasons: Vec<AuditReason>,
    #[serde(default)]
    pub cvss: Option<CvssSummary>,
}

/// One vulnerable package and the CVEs that affect it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuditReason {
    pub package: String,
    #[serde(default)]
    pub cvelist: Vec<String>,
}

/// Highest CVSS score over all findings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CvssSummary {
    #[serde(default)]
    pub score: f64,
}

pub(crate) fn api_error(msg: impl Into<String>) -> SbomToolError {
    SbomToolError::audit("API request", AuditErrorKind::ApiError(msg.into()))
}

/// Decode the body of an OS audit response.
///
/// Responses with `result` other than `"OK"` become [`AuditErrorKind::ApiError`]
/// carrying the server's message.
pub fn parse_audit_response(body: &str) -> Result<OsAuditData> {
    let invalid = |e: serde_json::Error| {
        SbomToolError::audit(
            "parsing response",
            AuditErrorKind::InvalidResponse(e.to_string()),
        )
    };

    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(body).map_err(invalid)?;
    if envelope.result != "OK" {
        let details: ApiErrorData = serde_json::from_value(envelope.data).unwrap_or_default();
        return Err(api_error(match (details.error, details.error_code) {
            (Some(message), Some(code)) => format!("{message} (code {code})"),
            (Some(message), None) => message,
            (None, _) => format!("result '{}'", envelope.result),
        }));
    }

    serde_json::from_value(envelope.data).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_response() {
        let body = r#"{
            "result": "OK",
            "data": {
                "packages": {},
                "vulnerabilities": ["DEBIAN:DSA-4986-1", "DEBIAN:DLA-2773-1"],
                "reasons": [
                    {"package": "curl 7.64.0 amd64", "operator": "lt", "bulletinID": "DEBIAN:DSA-4986-1",
                     "cvelist": ["CVE-2021-22945", "CVE-2021-22946"]}
                ],
                "cvss": {"score": 9.1, "vector": "AV:N/AC:L/Au:N/C:P/I:P/A:P"}
            }
        }"#;
        let data = parse_audit_response(body).unwrap();
        assert_eq!(data.vulnerabilities.len(), 2);
        assert_eq!(data.reasons[0].package, "curl 7.64.0 amd64");
        assert_eq!(data.reasons[0].cvelist, vec!["CVE-2021-22945", "CVE-2021-22946"]);
        assert!((data.cvss.unwrap().score - 9.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"result": "error", "data": {"error": "Wrong API key", "errorCode": 103}}"#;
        let err = parse_audit_response(body).unwrap_err();
        let message = err.to_string() + &format!("{:?}", err);
        assert!(message.contains("Wrong API key"), "{message}");
    }

    #[test]
    fn test_parse_garbage_response() {
        let err = parse_audit_response("<html>").unwrap_err();
        assert!(matches!(
            err,
            SbomToolError::Audit {
                source: AuditErrorKind::InvalidResponse(_),
                ..
            }
        ));
    }
}
