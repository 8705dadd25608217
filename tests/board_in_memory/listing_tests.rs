//! Owner isolation and status filtering for task listings.

use super::helpers::{Board, board};
use rstest::rstest;
use taskboard::task::domain::{StatusFilter, TaskPriority, TaskStatus, sort_for_display};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_user_sees_only_their_own_tasks(board: Board) -> Result<(), eyre::Report> {
    let (user_a, caller_a) = board.provision("user-a").await?;
    let (user_b, caller_b) = board.provision("user-b").await?;
    let task_a = board
        .seed_task(&user_a, "A's task", TaskStatus::Todo, TaskPriority::Low)
        .await?;
    let task_b = board
        .seed_task(&user_b, "B's task", TaskStatus::Todo, TaskPriority::Low)
        .await?;

    let seen_by_a = board.service.get_tasks(&caller_a, StatusFilter::All).await?;
    let seen_by_b = board.service.get_tasks(&caller_b, StatusFilter::All).await?;

    eyre::ensure!(seen_by_a.len() == 1 && seen_by_b.len() == 1);
    eyre::ensure!(seen_by_a.iter().all(|task| task.id() == task_a));
    eyre::ensure!(seen_by_b.iter().all(|task| task.id() == task_b));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_returns_matching_tasks_only(board: Board) -> Result<(), eyre::Report> {
    let (user, caller) = board.provision("user-2").await?;
    board
        .seed_task(&user, "Todo task", TaskStatus::Todo, TaskPriority::Low)
        .await?;
    board
        .seed_task(&user, "Done task", TaskStatus::Done, TaskPriority::High)
        .await?;

    let todo = board
        .service
        .get_tasks(&caller, StatusFilter::Only(TaskStatus::Todo))
        .await?;
    let done = board
        .service
        .get_tasks(&caller, StatusFilter::Only(TaskStatus::Done))
        .await?;
    let archived = board
        .service
        .get_tasks(&caller, StatusFilter::Only(TaskStatus::Archived))
        .await?;

    let todo_titles: Vec<&str> = todo.iter().map(|task| task.title().as_str()).collect();
    let done_titles: Vec<&str> = done.iter().map(|task| task.title().as_str()).collect();
    eyre::ensure!(todo_titles == ["Todo task"], "unexpected todo tasks: {todo_titles:?}");
    eyre::ensure!(done_titles == ["Done task"], "unexpected done tasks: {done_titles:?}");
    eyre::ensure!(archived.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_board_lists_nothing(board: Board) -> Result<(), eyre::Report> {
    let (_, caller) = board.provision("new-user").await?;
    let tasks = board.service.get_tasks(&caller, StatusFilter::All).await?;
    eyre::ensure!(tasks.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_sorted_for_display_puts_active_work_first(
    board: Board,
) -> Result<(), eyre::Report> {
    let (user, caller) = board.provision("user-1").await?;
    for (title, status) in [
        ("archived", TaskStatus::Archived),
        ("done", TaskStatus::Done),
        ("todo", TaskStatus::Todo),
        ("in progress", TaskStatus::InProgress),
    ] {
        board
            .seed_task(&user, title, status, TaskPriority::Medium)
            .await?;
    }

    let mut tasks = board.service.get_tasks(&caller, StatusFilter::All).await?;
    sort_for_display(&mut tasks);

    let statuses: Vec<TaskStatus> = tasks.iter().map(|task| task.status()).collect();
    eyre::ensure!(
        statuses
            == [
                TaskStatus::InProgress,
                TaskStatus::Todo,
                TaskStatus::Done,
                TaskStatus::Archived
            ],
        "unexpected order: {statuses:?}"
    );
    Ok(())
}
