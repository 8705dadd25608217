//! Create, update, and delete flows through the service.

use super::helpers::{Board, board};
use chrono::{Duration, Utc};
use rstest::rstest;
use taskboard::task::{
    domain::{StatusFilter, TaskDescription, TaskDomainError, TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskBoardError, UpdateTaskStatusRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_and_delete_round_trip(board: Board) -> Result<(), eyre::Report> {
    let (user, caller) = board.provision("user-1").await?;

    let task_id = board
        .service
        .create_task(
            &caller,
            CreateTaskRequest::new("Write report", "high")
                .with_description("Quarterly numbers")
                .with_tag_input("work, urgent"),
        )
        .await?;

    let listed = board.service.get_tasks(&caller, StatusFilter::All).await?;
    let [created] = listed.as_slice() else {
        return Err(eyre::eyre!("expected exactly one task, got {}", listed.len()));
    };
    eyre::ensure!(created.id() == task_id);
    eyre::ensure!(created.is_owned_by(user.id()));
    eyre::ensure!(created.status() == TaskStatus::Todo);
    eyre::ensure!(created.priority() == TaskPriority::High);
    eyre::ensure!(created.description().map(TaskDescription::as_str) == Some("Quarterly numbers"));
    eyre::ensure!(
        created.tags().map(|tags| tags.as_slice().to_vec())
            == Some(vec!["work".to_owned(), "urgent".to_owned()])
    );

    board
        .service
        .update_task_status(&caller, UpdateTaskStatusRequest::new(task_id, "done"))
        .await?;
    let done = board
        .service
        .get_tasks(&caller, StatusFilter::Only(TaskStatus::Done))
        .await?;
    eyre::ensure!(done.iter().map(|task| task.id()).eq([task_id]));

    board.service.delete_task(&caller, task_id).await?;
    let remaining = board.service.get_tasks(&caller, StatusFilter::All).await?;
    eyre::ensure!(remaining.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn optional_fields_may_be_omitted(board: Board) -> Result<(), eyre::Report> {
    let (_, caller) = board.provision("user-1").await?;

    let task_id = board
        .service
        .create_task(&caller, CreateTaskRequest::new("Bare task", "low"))
        .await?;

    let task = board
        .peek(task_id)
        .await?
        .ok_or_else(|| eyre::eyre!("created task missing"))?;
    eyre::ensure!(task.description().is_none());
    eyre::ensure!(task.due_date().is_none());
    eyre::ensure!(task.tags().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn past_due_date_is_accepted_and_reported_overdue(board: Board) -> Result<(), eyre::Report> {
    let (_, caller) = board.provision("user-1").await?;
    let yesterday = Utc::now() - Duration::days(1);

    let task_id = board
        .service
        .create_task(
            &caller,
            CreateTaskRequest::new("Late", "medium").with_due_date(yesterday),
        )
        .await?;

    let task = board
        .peek(task_id)
        .await?
        .ok_or_else(|| eyre::eyre!("created task missing"))?;
    eyre::ensure!(task.due_date() == Some(yesterday));
    eyre::ensure!(task.is_overdue(Utc::now()));
    Ok(())
}

#[rstest]
#[case::title_too_long("x".repeat(101), "medium")]
#[case::empty_title(String::new(), "medium")]
#[case::unknown_priority("Task".to_owned(), "urgent")]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_create_requests_store_nothing(
    board: Board,
    #[case] title: String,
    #[case] priority: &str,
) -> Result<(), eyre::Report> {
    let (_, caller) = board.provision("user-1").await?;

    let result = board
        .service
        .create_task(&caller, CreateTaskRequest::new(title, priority))
        .await;

    eyre::ensure!(
        matches!(result, Err(TaskBoardError::Validation(_))),
        "expected a validation error, got {result:?}"
    );
    let tasks = board.service.get_tasks(&caller, StatusFilter::All).await?;
    eyre::ensure!(tasks.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_at_limit_is_accepted(board: Board) -> Result<(), eyre::Report> {
    let (_, caller) = board.provision("user-1").await?;

    let task_id = board
        .service
        .create_task(&caller, CreateTaskRequest::new("x".repeat(100), "low"))
        .await?;

    eyre::ensure!(board.peek(task_id).await?.is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_is_a_validation_error(board: Board) -> Result<(), eyre::Report> {
    let (user, caller) = board.provision("user-1").await?;
    let task_id = board
        .seed_task(&user, "Task", TaskStatus::Todo, TaskPriority::Low)
        .await?;

    let result = board
        .service
        .update_task_status(&caller, UpdateTaskStatusRequest::new(task_id, "blocked"))
        .await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskBoardError::Validation(TaskDomainError::InvalidStatus(_)))
        ),
        "expected InvalidStatus, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn archived_tasks_can_be_reopened(board: Board) -> Result<(), eyre::Report> {
    let (user, caller) = board.provision("user-1").await?;
    let task_id = board
        .seed_task(&user, "Old task", TaskStatus::Archived, TaskPriority::Low)
        .await?;

    board
        .service
        .update_task_status(
            &caller,
            UpdateTaskStatusRequest::for_status(task_id, TaskStatus::InProgress),
        )
        .await?;

    let task = board
        .peek(task_id)
        .await?
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    eyre::ensure!(task.status() == TaskStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_reports_task_not_found(board: Board) -> Result<(), eyre::Report> {
    let (user, caller) = board.provision("user-1").await?;
    let task_id = board
        .seed_task(&user, "Task", TaskStatus::Done, TaskPriority::Low)
        .await?;

    board.service.delete_task(&caller, task_id).await?;
    let second = board.service.delete_task(&caller, task_id).await;

    eyre::ensure!(
        matches!(second, Err(TaskBoardError::TaskNotFound(id)) if id == task_id),
        "expected TaskNotFound, got {second:?}"
    );
    Ok(())
}
