//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The external subject identifier is empty or blank.
    #[error("auth subject must not be empty")]
    EmptyAuthSubject,
}
