//! Configuration validation.

use super::defaults::MAX_API_RETRIES;
use super::types::{AppConfig, AuditConfig, BehaviorConfig, OutputConfig};

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.audit.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for AuditConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            errors.push(ConfigError {
                field: "audit.api_base".to_string(),
                message: format!(
                    "API base must be an http or https URL, got '{}'",
                    self.api_base
                ),
            });
        }

        if self.timeout_secs == 0 {
            errors.push(ConfigError {
                field: "audit.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.max_retries > MAX_API_RETRIES {
            errors.push(ConfigError {
                field: "audit.max_retries".to_string(),
                message: format!(
                    "At most {MAX_API_RETRIES} retries are allowed, got {}",
                    self.max_retries
                ),
            });
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_ref().and_then(|path| path.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Boolean flags are always valid
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_audit_config_validation() {
        let invalid = AuditConfig {
            api_base: "ftp://vulners.com".to_string(),
            timeout_secs: 0,
            max_retries: 11,
            ..AuditConfig::default()
        };
        let fields: Vec<String> = invalid.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "audit.api_base",
                "audit.timeout_secs",
                "audit.max_retries"
            ]
        );

        let local = AuditConfig {
            api_base: "http://localhost:8080".to_string(),
            max_retries: 10,
            ..AuditConfig::default()
        };
        assert!(local.is_valid());
    }

    #[test]
    fn test_output_config_validation() {
        let relative = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(relative.is_valid());

        let missing_parent = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..OutputConfig::default()
        };
        let errors = missing_parent.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("output.file:"));
    }
}
