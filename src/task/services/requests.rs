//! Request payloads carrying unvalidated caller input.

use crate::task::domain::{
    NewTask, TaskDescription, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTags,
    TaskTitle,
};
use chrono::{DateTime, Utc};

/// Request payload for creating a task.
///
/// Has no status field: new tasks always start as `todo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: String,
    due_date: Option<DateTime<Utc>>,
    tags: Option<Vec<String>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: priority.into(),
            due_date: None,
            tags: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Sets the tags from comma-separated form input.
    #[must_use]
    pub fn with_tag_input(mut self, input: &str) -> Self {
        self.tags = TaskTags::parse_comma_separated(input).map(TaskTags::into_inner);
        self
    }

    /// Validates the payload into task content.
    ///
    /// An empty description or tag list is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title, description, or priority
    /// is out of bounds.
    pub fn validate(self) -> Result<NewTask, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let priority = TaskPriority::try_from(self.priority.as_str())?;
        let mut content = NewTask::new(title, priority);

        if let Some(description) = self.description.filter(|value| !value.is_empty()) {
            content = content.with_description(TaskDescription::new(description)?);
        }
        if let Some(due_date) = self.due_date {
            content = content.with_due_date(due_date);
        }
        if let Some(tags) = self.tags.filter(|values| !values.is_empty()) {
            content = content.with_tags(TaskTags::new(tags));
        }
        Ok(content)
    }
}

/// Request payload for replacing a task's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    task_id: TaskId,
    status: String,
}

impl UpdateTaskStatusRequest {
    /// Creates a request from a raw status value.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }

    /// Creates a request from an already typed status.
    #[must_use]
    pub fn for_status(task_id: TaskId, status: TaskStatus) -> Self {
        Self::new(task_id, status.as_str())
    }

    /// Returns the target task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Parses the requested status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] for unknown values.
    pub fn status(&self) -> Result<TaskStatus, TaskDomainError> {
        Ok(TaskStatus::try_from(self.status.as_str())?)
    }
}
