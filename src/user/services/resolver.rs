//! Resolves request callers to internal user records.

use crate::user::{
    domain::{AuthSubject, Caller, User},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures raised while resolving a caller.
#[derive(Debug, Error)]
pub enum UserResolutionError {
    /// The request carries no authenticated identity.
    #[error("not authenticated")]
    Unauthenticated,

    /// The identity is valid but no user has been provisioned for it.
    #[error("user not found for subject {0}")]
    UserNotFound(AuthSubject),

    /// Repository lookup failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for caller resolution.
pub type UserResolutionResult<T> = Result<T, UserResolutionError>;

/// Returns the caller's subject without touching any repository.
///
/// # Errors
///
/// Returns [`UserResolutionError::Unauthenticated`] for anonymous callers.
pub fn require_subject(caller: &Caller) -> UserResolutionResult<&AuthSubject> {
    match caller.subject() {
        Some(subject) => Ok(subject),
        None => Err(UserResolutionError::Unauthenticated),
    }
}

/// Looks up the internal user behind an authenticated caller.
///
/// Resolution never provisions users: a subject without a stored record is a
/// hard failure.
#[derive(Clone)]
pub struct UserResolver<U>
where
    U: UserRepository,
{
    repository: Arc<U>,
}

impl<U> UserResolver<U>
where
    U: UserRepository,
{
    /// Creates a resolver backed by the given repository.
    #[must_use]
    pub const fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Loads the user whose external subject matches.
    ///
    /// # Errors
    ///
    /// Returns [`UserResolutionError::UserNotFound`] when no user matches, or
    /// [`UserResolutionError::Repository`] when the lookup fails.
    pub async fn resolve_subject(&self, subject: &AuthSubject) -> UserResolutionResult<User> {
        match self.repository.find_by_subject(subject).await? {
            Some(user) => {
                debug!(user_id = %user.id(), "resolved caller");
                Ok(user)
            }
            None => {
                warn!(subject = %subject, "no user provisioned for subject");
                Err(UserResolutionError::UserNotFound(subject.clone()))
            }
        }
    }

    /// Resolves a caller to its user record.
    ///
    /// # Errors
    ///
    /// Returns [`UserResolutionError::Unauthenticated`] for anonymous callers
    /// and otherwise the errors of [`Self::resolve_subject`].
    pub async fn resolve(&self, caller: &Caller) -> UserResolutionResult<User> {
        let subject = require_subject(caller)?;
        self.resolve_subject(subject).await
    }
}
