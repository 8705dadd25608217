//! Task aggregate root.

use super::{TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTags, TaskTitle};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated content of a task about to be created.
///
/// Carries no status: every new task starts as [`TaskStatus::Todo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<TaskDescription>,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    tags: Option<TaskTags>,
}

impl NewTask {
    /// Creates task content with the required fields.
    #[must_use]
    pub const fn new(title: TaskTitle, priority: TaskPriority) -> Self {
        Self {
            title,
            description: None,
            priority,
            due_date: None,
            tags: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TaskTags) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Task aggregate root, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    tags: Option<TaskTags>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted tags, if any.
    pub tags: Option<TaskTags>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new `todo` task owned by `owner`.
    #[must_use]
    pub fn new(owner: UserId, content: NewTask, clock: &impl Clock) -> Self {
        let NewTask {
            title,
            description,
            priority,
            due_date,
            tags,
        } = content;

        Self {
            id: TaskId::new(),
            owner,
            title,
            description,
            status: TaskStatus::Todo,
            priority,
            due_date,
            tags,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            tags: data.tags,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the tags, if any.
    #[must_use]
    pub const fn tags(&self) -> Option<&TaskTags> {
        self.tags.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when `user` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }

    /// Replaces the status. Every status may follow every other.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Returns `true` when the due date has passed and the task is still open.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_closed() && self.due_date.is_some_and(|due| due < now)
    }
}
