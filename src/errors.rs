//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoilError {
    /// A geometric or stack-up input is out of range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears on the builder.
        name: &'static str,
        /// Offending value.
        value: Scalar,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
    /// A parameter required by the chosen configuration was not supplied.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    /// The inductance formula has no coefficient set for the shape.
    #[error("formula `{formula}` is not available for shape `{shape}`")]
    UnsupportedFormula {
        /// Shape name.
        shape: String,
        /// Formula name.
        formula: String,
    },
    /// A shape name could not be parsed.
    #[error("unknown shape: {0}")]
    UnknownShape(String),
    /// A formula name could not be parsed.
    #[error("unknown inductance formula: {0}")]
    UnknownFormula(String),
}

impl CoilError {
    pub(crate) const fn invalid(name: &'static str, value: Scalar, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Convenience alias for results produced by this crate.
pub type CoilResult<T> = Result<T, CoilError>;

/// Errors raised while loading a context or coil description from JSON.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document parsed but described an invalid coil or context.
    #[error(transparent)]
    Coil(#[from] CoilError),
    /// The document is not valid JSON for the expected schema.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejects non-finite or non-positive values.
pub(crate) fn require_positive(name: &'static str, value: Scalar) -> CoilResult<Scalar> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CoilError::invalid(name, value, "must be a finite value greater than zero"))
    }
}
