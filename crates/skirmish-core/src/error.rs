//! Error types for fallible construction.

use thiserror::Error;

/// Rejected simulation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("play area must be non-empty, got {width}x{height}")]
    EmptyPlayArea { width: f64, height: f64 },
}
