//! Unified error types for the domain layer
//!
//! Classification and voice resolution are total and never fail; the only
//! domain failures are validation failures on incoming screenplays.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A collection exceeded its allowed size
    #[error("Too many {what}: {count} (maximum {max})")]
    TooMany {
        what: &'static str,
        count: usize,
        max: usize,
    },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if title.len() > MAX_TITLE_LENGTH {
    ///     return Err(DomainError::validation("Title is too long"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a too-many error
    pub fn too_many(what: &'static str, count: usize, max: usize) -> Self {
        Self::TooMany { what, count, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_message() {
        let err = DomainError::too_many("elements", 12, 10);
        assert_eq!(err.to_string(), "Too many elements: 12 (maximum 10)");
    }

    #[test]
    fn test_validation_message() {
        let err = DomainError::validation("Title is too long");
        assert_eq!(err.to_string(), "Validation failed: Title is too long");
    }
}
