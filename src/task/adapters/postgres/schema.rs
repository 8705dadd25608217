//! Diesel schema for task persistence.

diesel::table! {
    /// Owner-scoped task records.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning user identifier.
        user_id -> Uuid,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Priority level.
        #[max_length = 10]
        priority -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Optional ordered tag list as a JSON array.
        tags -> Nullable<Jsonb>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
