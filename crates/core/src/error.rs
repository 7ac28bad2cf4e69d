//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the inventory is left exactly as it was
/// before the failing call. Console concerns (prompting, rendering) belong
/// to the shell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Insertion attempted with an identifier that is already present.
    #[error("product {0} already exists")]
    DuplicateId(ProductId),

    /// A lookup, update or delete referenced an identifier that is not present.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A value failed validation (e.g. negative stock).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (negative or unparsable).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate(id: ProductId) -> Self {
        Self::DuplicateId(id)
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    /// True for the outcomes a caller is expected to handle routinely
    /// (`DuplicateId`, `NotFound`), as opposed to rejected input.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::DuplicateId(_) | Self::NotFound(_))
    }
}
