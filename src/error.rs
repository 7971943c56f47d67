//! Error types for costctl
//!
//! Library code uses `crate::error::Result<T>` which returns `CostctlError`.
//! CLI code uses `anyhow::Result<T>` for top-level error handling, converting
//! at the boundary with `anyhow::Error::from` to preserve error chains.
//!
//! The core estimation path can fail in exactly two ways:
//!
//! - `NotFound`: the requested category/provider/option triple is not in the
//!   price catalog
//! - `InvalidUsage`: the usage amount is negative or non-finite
//!
//! Both are input-validation rejections. They are reported synchronously to
//! the caller, never retried, and never fatal to the process: the CLI
//! surfaces them and the user corrects the input. `Config` and `Io` cover
//! the pricing-file loading path only.

use thiserror::Error;

/// Main error type for costctl
#[derive(Error, Debug)]
pub enum CostctlError {
    #[error("{what} not found: {name}")]
    NotFound { what: &'static str, name: String },

    #[error("Invalid usage amount {value}: {reason}")]
    InvalidUsage { value: f64, reason: &'static str },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors (pricing file loading and validation)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Pricing file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse pricing file: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CostctlError>;

impl CostctlError {
    /// Shorthand for catalog lookup misses.
    pub(crate) fn not_found(what: &'static str, name: impl Into<String>) -> Self {
        CostctlError::NotFound {
            what,
            name: name.into(),
        }
    }
}
