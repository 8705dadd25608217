//! Application services for the task board.

mod authorization;
mod board;
mod error;
mod requests;

pub use authorization::ensure_owner;
pub use board::TaskBoardService;
pub use error::{TaskBoardError, TaskBoardResult};
pub use requests::{CreateTaskRequest, UpdateTaskStatusRequest};
