//! Domain model for owner-scoped tasks.
//!
//! Tasks belong to exactly one user. Field bounds are enforced by the value
//! types here, before anything reaches a repository.

mod error;
mod fields;
mod ids;
mod ordering;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use fields::{TaskDescription, TaskTags, TaskTitle};
pub use ids::TaskId;
pub use ordering::{display_order, sort_for_display};
pub use status::{StatusFilter, TaskPriority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task};
