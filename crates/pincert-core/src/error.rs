//! Certification error types.
//!
//! The evaluator itself is total; these errors surface at the edges where
//! caller-supplied values are turned into domain types.

use thiserror::Error;

/// Errors raised while building or evaluating certification inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertifyError {
    /// A caller-supplied value could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required module set listed the same module twice.
    #[error("duplicate module id: {0}")]
    DuplicateModule(String),

    /// A score was requested against a total of zero.
    #[error("cannot compute a score against a total of 0")]
    InvalidDivisor,

    /// A pass threshold outside 0..=100.
    #[error("pass threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(u32),
}
