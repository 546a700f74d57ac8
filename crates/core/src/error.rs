//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every validation failure is raised at the point of mutation and nothing is
/// changed when one is returned. Nothing in the domain layer catches or retries
/// these; callers decide what to do with them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mandatory input was absent.
    #[error("{0} must not be null")]
    NullValue(String),

    /// A mandatory string input was present but empty.
    #[error("{0} must not be empty")]
    EmptyValue(String),

    /// A numeric input was out of its domain, or a query had no usable criteria.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An add targeted an ISBN that is already present.
    #[error("duplicate book: isbn {0} is already in the catalog")]
    Duplicate(i64),
}

impl DomainError {
    pub fn null_value(field: impl Into<String>) -> Self {
        Self::NullValue(field.into())
    }

    pub fn empty_value(field: impl Into<String>) -> Self {
        Self::EmptyValue(field.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate(isbn: i64) -> Self {
        Self::Duplicate(isbn)
    }
}

/// Validate a mandatory text input: absent -> `NullValue`, `""` -> `EmptyValue`.
///
/// Only the literal empty string is rejected; whitespace-only text is kept as-is.
pub fn require_text(field: &str, value: Option<String>) -> DomainResult<String> {
    match value {
        None => Err(DomainError::null_value(field)),
        Some(v) if v.is_empty() => Err(DomainError::empty_value(field)),
        Some(v) => Ok(v),
    }
}
