//! Unified error types for vulners-sbom.
//!
//! Core extraction reports [`ParseError`]; everything that talks to the
//! outside world (files, the audit API, configuration) is wrapped in
//! [`SbomToolError`] with a chain of human-readable context.

use crate::parsers::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vulners-sbom operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomToolError {
    /// Errors while loading or extracting an SBOM
    #[error("Failed to parse SBOM: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Errors talking to the vulnerability audit API
    #[error("Audit failed: {context}")]
    Audit {
        context: String,
        #[source]
        source: AuditErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific audit error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditErrorKind {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Missing API key")]
    MissingApiKey,
}

/// Convenient Result type for vulners-sbom operations
pub type Result<T> = std::result::Result<T, SbomToolError>;

impl SbomToolError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an audit error with context
    pub fn audit(context: impl Into<String>, source: AuditErrorKind) -> Self {
        Self::Audit {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for SbomToolError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ParseError> for SbomToolError {
    fn from(err: ParseError) -> Self {
        Self::parse("", err)
    }
}

/// Extension trait for adding context to errors.
///
/// Context chains rather than replaces: adding `"outer"` to an error whose
/// context is `"inner"` yields `"outer: inner"`.
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomToolError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: SbomToolError, new_ctx: &str) -> SbomToolError {
    match err {
        SbomToolError::Parse {
            context: existing,
            source,
        } => SbomToolError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomToolError::Audit {
            context: existing,
            source,
        } => SbomToolError::Audit {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomToolError::Io {
            path,
            message,
            source,
        } => SbomToolError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomToolError::Config(msg) => SbomToolError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Join two context strings as `"new: existing"`, or just `new` when `existing` is empty
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a configuration error with the given message
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| SbomToolError::Config(context.into()))
    }
}
