//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{StatusFilter, TaskDomainError, TaskStatus},
    ports::TaskRepository,
    services::TaskBoardError,
};

fn last_result(world: &TaskBoardWorld) -> Result<&Result<(), TaskBoardError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))
}

fn count_visible(
    world: &TaskBoardWorld,
    name: &str,
    filter: StatusFilter,
) -> Result<usize, eyre::Report> {
    let caller = TaskBoardWorld::caller(name)?;
    Ok(run_async(world.service.get_tasks(&caller, filter))?.len())
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected success, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails as unauthorized")]
fn fails_unauthorized(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskBoardError::Unauthorized { .. })) {
        return Err(eyre::eyre!("expected Unauthorized error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails as unauthenticated")]
fn fails_unauthenticated(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskBoardError::Unauthenticated)) {
        return Err(eyre::eyre!("expected Unauthenticated error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with user not found")]
fn fails_user_not_found(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskBoardError::UserNotFound(_))) {
        return Err(eyre::eyre!("expected UserNotFound error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with task not found")]
fn fails_task_not_found(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskBoardError::TaskNotFound(_))) {
        return Err(eyre::eyre!("expected TaskNotFound error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails validation")]
fn fails_validation(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(TaskBoardError::Validation(TaskDomainError::TitleTooLong { .. }))
    ) {
        return Err(eyre::eyre!("expected TitleTooLong error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the last task has status "{status}""#)]
fn last_task_has_status(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let task = run_async(world.tasks.find_by_id(world.last_task()?))?
        .ok_or_else(|| eyre::eyre!("last task no longer exists"))?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the task count for "{name}" is {count:usize}"#)]
fn task_count_is(world: &TaskBoardWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let actual = count_visible(world, &name, StatusFilter::All)?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks for {name}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the number of "{status}" tasks for "{name}" is {count:usize}"#)]
fn task_count_with_status_is(
    world: &TaskBoardWorld,
    status: String,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let filter = StatusFilter::try_from(status.as_str())?;
    let actual = count_visible(world, &name, filter)?;
    if actual != count {
        return Err(eyre::eyre!(
            "expected {count} {status} tasks for {name}, found {actual}"
        ));
    }
    Ok(())
}
