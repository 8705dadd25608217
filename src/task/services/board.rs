//! Owner-scoped task operations exposed to the UI layer.

use super::{
    CreateTaskRequest, TaskBoardError, TaskBoardResult, UpdateTaskStatusRequest, ensure_owner,
};
use crate::task::{
    domain::{StatusFilter, Task, TaskId},
    ports::TaskRepository,
};
use crate::user::{
    domain::{Caller, UserId},
    ports::UserRepository,
    services::{UserResolver, require_subject},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Task board service.
///
/// Every operation takes the caller explicitly. Anonymous callers are
/// rejected before any input validation or store access; input is
/// validated before the caller's user record is loaded.
#[derive(Clone)]
pub struct TaskBoardService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: UserResolver<U>,
    clock: Arc<C>,
}

impl<T, U, C> TaskBoardService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users: UserResolver::new(users),
            clock,
        }
    }

    /// Lists the caller's tasks, optionally restricted to one status.
    ///
    /// The order is unspecified; see
    /// [`sort_for_display`](crate::task::domain::sort_for_display).
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Unauthenticated`] or
    /// [`TaskBoardError::UserNotFound`] when the caller cannot be resolved,
    /// or a repository error when the lookup fails.
    #[instrument(skip_all, fields(filter = filter.as_str()))]
    pub async fn get_tasks(
        &self,
        caller: &Caller,
        filter: StatusFilter,
    ) -> TaskBoardResult<Vec<Task>> {
        let user = self.users.resolve(caller).await?;
        let tasks = self.tasks.list_by_owner(user.id(), filter.status()).await?;
        debug!(user_id = %user.id(), count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Creates a `todo` task owned by the caller and returns its identifier.
    ///
    /// Repeated calls create repeated tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Unauthenticated`] for anonymous callers,
    /// [`TaskBoardError::Validation`] for out-of-bounds input,
    /// [`TaskBoardError::UserNotFound`] for unprovisioned callers, or a
    /// repository error when persistence fails.
    #[instrument(skip_all)]
    pub async fn create_task(
        &self,
        caller: &Caller,
        request: CreateTaskRequest,
    ) -> TaskBoardResult<TaskId> {
        let subject = require_subject(caller)?;
        let content = request.validate()?;
        let user = self.users.resolve_subject(subject).await?;

        let task = Task::new(user.id(), content, &*self.clock);
        self.tasks.store(&task).await?;
        info!(
            task_id = %task.id(),
            user_id = %user.id(),
            priority = %task.priority(),
            "created task"
        );
        Ok(task.id())
    }

    /// Replaces the status of a task owned by the caller.
    ///
    /// Any status may follow any other; concurrent updates are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Unauthenticated`],
    /// [`TaskBoardError::Validation`] for an unknown status,
    /// [`TaskBoardError::UserNotFound`], [`TaskBoardError::TaskNotFound`],
    /// [`TaskBoardError::Unauthorized`] when the caller is not the owner, or a
    /// repository error.
    #[instrument(skip_all, fields(task_id = %request.task_id()))]
    pub async fn update_task_status(
        &self,
        caller: &Caller,
        request: UpdateTaskStatusRequest,
    ) -> TaskBoardResult<()> {
        let subject = require_subject(caller)?;
        let status = request.status()?;
        let user = self.users.resolve_subject(subject).await?;

        let task = self.load_owned(user.id(), request.task_id()).await?;
        self.tasks.update_status(task.id(), status).await?;
        info!(from = %task.status(), to = %status, "updated task status");
        Ok(())
    }

    /// Permanently deletes a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Unauthenticated`],
    /// [`TaskBoardError::UserNotFound`], [`TaskBoardError::TaskNotFound`] when
    /// the task is missing (including repeated deletes),
    /// [`TaskBoardError::Unauthorized`] when the caller is not the owner, or a
    /// repository error.
    #[instrument(skip_all, fields(task_id = %task_id))]
    pub async fn delete_task(&self, caller: &Caller, task_id: TaskId) -> TaskBoardResult<()> {
        let user = self.users.resolve(caller).await?;

        let task = self.load_owned(user.id(), task_id).await?;
        self.tasks.delete(task.id()).await?;
        info!("deleted task");
        Ok(())
    }

    /// Loads a task and applies the ownership guard.
    async fn load_owned(&self, user: UserId, task_id: TaskId) -> TaskBoardResult<Task> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskBoardError::TaskNotFound(task_id))?;
        if let Err(err) = ensure_owner(user, &task) {
            warn!(user_id = %user, "rejected access to task owned by another user");
            return Err(err);
        }
        Ok(task)
    }
}
