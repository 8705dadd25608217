//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTags,
        TaskTitle,
    },
    ports::{TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional JSON array of tags.
    pub tags: Option<Value>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional JSON array of tags.
    pub tags: Option<Value>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewTaskRow {
    /// Builds the insert row for a task aggregate.
    pub(crate) fn from_task(task: &Task) -> TaskRepositoryResult<Self> {
        let tags = task
            .tags()
            .map(serde_json::to_value)
            .transpose()
            .map_err(TaskRepositoryError::persistence)?;

        Ok(Self {
            id: task.id().into_inner(),
            user_id: task.owner().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|value| value.as_str().to_owned()),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            due_date: task.due_date(),
            tags,
            created_at: task.created_at(),
        })
    }
}

/// Rebuilds a task aggregate from a stored row.
pub(crate) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        user_id,
        title: persisted_title,
        description: persisted_description,
        status: persisted_status,
        priority: persisted_priority,
        due_date,
        tags: persisted_tags,
        created_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let description = persisted_description
        .map(TaskDescription::new)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let tags = persisted_tags
        .map(serde_json::from_value::<TaskTags>)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner: UserId::from_uuid(user_id),
        title,
        description,
        status,
        priority,
        due_date,
        tags,
        created_at,
    }))
}
