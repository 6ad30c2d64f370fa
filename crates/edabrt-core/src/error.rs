//! Errors raised while validating deflector parameters.

use thiserror::Error;

/// Errors from constructing [`DeflectorParameters`](crate::types::DeflectorParameters).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Reference radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("Parameter '{name}' must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
