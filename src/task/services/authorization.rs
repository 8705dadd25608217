//! Ownership guard shared by every single-task operation.

use super::{TaskBoardError, TaskBoardResult};
use crate::task::domain::Task;
use crate::user::domain::UserId;

/// Allows access only when `user` owns `task`.
///
/// # Errors
///
/// Returns [`TaskBoardError::Unauthorized`] for any other user.
pub fn ensure_owner(user: UserId, task: &Task) -> TaskBoardResult<()> {
    if task.is_owned_by(user) {
        Ok(())
    } else {
        Err(TaskBoardError::Unauthorized { task_id: task.id() })
    }
}
