//! Catalog error types

use thiserror::Error;

use crate::core::validation::ProductViolation;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error types.
///
/// Each variant renders a fixed message. Causes of network failures are
/// logged where they happen and not kept as a `source`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("invalid product")]
    Validation { violations: Vec<ProductViolation> },

    #[error("You are not allowed to create products")]
    Permission,

    #[error("unable to make request")]
    Network,
}

impl CatalogError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Violations behind a `Validation` error, empty for every other kind
    pub fn violations(&self) -> &[ProductViolation] {
        match self {
            Self::Validation { violations } => violations,
            _ => &[],
        }
    }
}
