//! Domain model for users and request identities.

mod caller;
mod error;
mod ids;
mod user;

pub use caller::Caller;
pub use error::UserDomainError;
pub use ids::{AuthSubject, UserId};
pub use user::{PersistedUserData, User};
