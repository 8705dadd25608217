//! Diesel schema for user persistence.

diesel::table! {
    /// Internal users keyed by external auth subject.
    users (id) {
        /// Internal user identifier.
        id -> Uuid,
        /// External auth subject, unique across users.
        #[max_length = 255]
        auth_id -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
