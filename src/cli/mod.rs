//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

#[cfg(feature = "audit")]
mod audit;
mod extract;

#[cfg(feature = "audit")]
pub use audit::run_audit;
pub use extract::run_extract;

use crate::config::{AppConfig, Validatable};
use crate::parsers::{ParseError, SUPPORTED_FORMATS};
use anyhow::{bail, Result};

/// Message shown for documents no format recognises
#[must_use]
pub fn unsupported_format_message() -> String {
    format!("Unsupported file format. Please use one of {SUPPORTED_FORMATS}")
}

/// Print a command failure to stderr.
///
/// Unrecognised documents additionally get the list of accepted formats.
pub fn report_failure(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");
    let unknown_format = err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<ParseError>(), Some(ParseError::UnknownFormat(_))));
    if unknown_format {
        eprintln!("{}", unsupported_format_message());
    }
}

/// Reject configurations that would fail later in a less obvious way
pub fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        tracing::error!("{}", error);
    }
    bail!("Invalid configuration ({} errors)", errors.len())
}
