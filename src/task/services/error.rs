//! Service-level errors for task board operations.

use crate::task::{
    domain::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use crate::user::{
    domain::AuthSubject, ports::UserRepositoryError, services::UserResolutionError,
};
use thiserror::Error;

/// Failures surfaced to the invoking layer.
///
/// Every variant aborts the operation without partial effects.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// The request carries no authenticated identity.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The identity has no provisioned user record.
    #[error("User not found: {0}")]
    UserNotFound(AuthSubject),

    /// The caller does not own the target task.
    #[error("Unauthorized: task {task_id} belongs to another user")]
    Unauthorized {
        /// The task the caller tried to access.
        task_id: TaskId,
    },

    /// The target task does not exist.
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// Input failed validation before reaching the store.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// User lookup failed.
    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),

    /// Task persistence failed.
    #[error(transparent)]
    TaskRepository(TaskRepositoryError),
}

/// Result type for task board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

impl From<UserResolutionError> for TaskBoardError {
    fn from(err: UserResolutionError) -> Self {
        match err {
            UserResolutionError::Unauthenticated => Self::Unauthenticated,
            UserResolutionError::UserNotFound(subject) => Self::UserNotFound(subject),
            UserResolutionError::Repository(source) => Self::UserRepository(source),
        }
    }
}

impl From<TaskRepositoryError> for TaskBoardError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(task_id) => Self::TaskNotFound(task_id),
            other => Self::TaskRepository(other),
        }
    }
}

impl From<ParseTaskStatusError> for TaskBoardError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::Validation(err.into())
    }
}

impl From<ParseTaskPriorityError> for TaskBoardError {
    fn from(err: ParseTaskPriorityError) -> Self {
        Self::Validation(err.into())
    }
}
