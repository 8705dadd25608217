//! Diesel row models for user persistence.

use super::schema::users;
use crate::user::{
    domain::{AuthSubject, PersistedUserData, User, UserId},
    ports::{UserRepositoryError, UserRepositoryResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Internal user identifier.
    pub id: uuid::Uuid,
    /// External auth subject.
    pub auth_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Internal user identifier.
    pub id: uuid::Uuid,
    /// External auth subject.
    pub auth_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for NewUserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().into_inner(),
            auth_id: user.subject().as_str().to_owned(),
            created_at: user.created_at(),
        }
    }
}

impl TryFrom<UserRow> for User {
    type Error = UserRepositoryError;

    fn try_from(row: UserRow) -> UserRepositoryResult<Self> {
        let subject = AuthSubject::new(row.auth_id).map_err(UserRepositoryError::persistence)?;
        Ok(Self::from_persisted(PersistedUserData {
            id: UserId::from_uuid(row.id),
            subject,
            created_at: row.created_at,
        }))
    }
}
