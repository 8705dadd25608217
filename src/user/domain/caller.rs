//! Request-scoped caller identity.

use super::{AuthSubject, UserDomainError};

/// Identity attached to an incoming request by the authentication layer.
///
/// Every task board operation receives the caller explicitly instead of
/// reading it from ambient request state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Caller {
    /// No authenticated identity is present.
    #[default]
    Anonymous,
    /// The request carries an authenticated subject.
    Authenticated(AuthSubject),
}

impl Caller {
    /// Creates an authenticated caller from a raw subject string.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError`] when the subject fails validation.
    pub fn authenticated(subject: impl Into<String>) -> Result<Self, UserDomainError> {
        Ok(Self::Authenticated(AuthSubject::new(subject)?))
    }

    /// Builds a caller from the optional subject handed over by the identity
    /// provider.
    ///
    /// Only a missing or blank subject yields [`Caller::Anonymous`]; any other
    /// value is an authenticated identity, whether or not a user exists for it.
    #[must_use]
    pub fn from_subject(subject: Option<&str>) -> Self {
        match subject.map(AuthSubject::new) {
            Some(Ok(subject)) => Self::Authenticated(subject),
            Some(Err(UserDomainError::EmptyAuthSubject)) | None => Self::Anonymous,
        }
    }

    /// Returns the authenticated subject, if any.
    #[must_use]
    pub const fn subject(&self) -> Option<&AuthSubject> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(subject) => Some(subject),
        }
    }
}
