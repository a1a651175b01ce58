//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// unknown scenarios, store conflicts). File and parsing concerns belong to the
/// import/export layer.
///
/// Numeric faults inside the metrics engine are *not* represented here: they
/// propagate as NaN/infinite values on the offending record instead of failing
/// the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty SKU number, unknown class).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A scenario label did not name one of the known scenarios.
    #[error("invalid scenario: {0:?}")]
    InvalidScenario(String),

    /// A requested SKU was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. duplicate SKU label).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_scenario(label: impl Into<String>) -> Self {
        Self::InvalidScenario(label.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
