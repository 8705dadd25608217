//! Shared world state for task board BDD scenarios.

use std::{collections::HashMap, sync::Arc};

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::TaskId,
        services::{TaskBoardError, TaskBoardService},
    },
    user::{
        adapters::memory::InMemoryUserRepository,
        domain::{Caller, User},
    },
};

/// Service type used by the BDD world.
pub type TestBoardService =
    TaskBoardService<InMemoryTaskRepository, InMemoryUserRepository, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestBoardService,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub registered: HashMap<String, User>,
    pub last_task_id: Option<TaskId>,
    pub last_result: Option<Result<(), TaskBoardError>>,
}

impl TaskBoardWorld {
    /// Creates a world with an empty board and no registered users.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let service =
            TaskBoardService::new(Arc::clone(&tasks), Arc::clone(&users), Arc::new(DefaultClock));

        Self {
            service,
            tasks,
            users,
            registered: HashMap::new(),
            last_task_id: None,
            last_result: None,
        }
    }

    /// Builds an authenticated caller for `name`, registered or not.
    pub fn caller(name: &str) -> Result<Caller, eyre::Report> {
        Ok(Caller::authenticated(name)?)
    }

    /// Returns the most recently created task identifier.
    pub fn last_task(&self) -> Result<TaskId, eyre::Report> {
        self.last_task_id
            .ok_or_else(|| eyre::eyre!("missing last task in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
