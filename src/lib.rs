//! costctl library
//!
//! Core pricing catalog and estimation engine for the costctl CLI. The
//! catalog is a static, read-only price table; estimation is a validated
//! lookup plus one multiplication; advice is a fixed rule table.

pub mod advice;
pub mod catalog;
pub mod config;
pub mod error;
pub mod estimate;

// Re-export commonly used types
pub use advice::advise_for;
pub use catalog::{CategoryKind, PriceCatalog, Provider, Unit};
pub use error::{ConfigError, CostctlError, Result};
pub use estimate::{estimate, Estimate};
