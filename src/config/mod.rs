//! Configuration module for vulners-sbom.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.vulners-sbom.yaml` file in your project root or `~/.config/vulners-sbom/`:
//!
//! ```yaml
//! audit:
//!   timeout_secs: 60
//! output:
//!   format: json
//! behavior:
//!   fail_on_vuln: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_API_BASE, DEFAULT_API_MAX_RETRIES, DEFAULT_API_TIMEOUT_SECS, MAX_API_RETRIES,
};
pub use types::{AppConfig, AuditConfig, BehaviorConfig, CliOverrides, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
