use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The field set was rejected (wrong types, empty search term, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Package not found: {0}")]
    NotFound(String),

    /// Unexpected failure of the backing store
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
