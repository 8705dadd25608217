//! In-memory repository for task board tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
///
/// Mirrors the owner and owner+status indexes of the `PostgreSQL` schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    owner_index: HashMap<UserId, Vec<TaskId>>,
    owner_status_index: HashMap<(UserId, TaskStatus), Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Removes a task ID from an index, cleaning up the entry if empty.
fn remove_from_index<K>(index: &mut HashMap<K, Vec<TaskId>>, task_id: TaskId, key: &K)
where
    K: Eq + Hash,
{
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

/// Helper to look up tasks by index key.
fn find_by_index<K>(
    state: &InMemoryTaskState,
    index: &HashMap<K, Vec<TaskId>>,
    key: &K,
) -> Vec<Task>
where
    K: Eq + Hash,
{
    index
        .get(key)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| state.tasks.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state
            .owner_index
            .entry(task.owner())
            .or_default()
            .push(task.id());
        state
            .owner_status_index
            .entry((task.owner(), task.status()))
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
        status: Option<TaskStatus>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let tasks = match status {
            Some(status_filter) => {
                find_by_index(&state, &state.owner_status_index, &(owner, status_filter))
            }
            None => find_by_index(&state, &state.owner_index, &owner),
        };
        Ok(tasks)
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        let previous = task.status();
        let owner = task.owner();
        task.set_status(status);

        if previous != status {
            remove_from_index(&mut state.owner_status_index, id, &(owner, previous));
            state
                .owner_status_index
                .entry((owner, status))
                .or_default()
                .push(id);
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;

        remove_from_index(&mut state.owner_index, id, &task.owner());
        remove_from_index(
            &mut state.owner_status_index,
            id,
            &(task.owner(), task.status()),
        );
        Ok(())
    }
}
