//! Presentation ordering for task listings.
//!
//! The list query makes no ordering promise, so views sort client-side.

use super::Task;
use std::cmp::Ordering;

/// Compares two tasks for display: in-progress work first, then `todo`,
/// `done`, and `archived`; newest first within a status.
#[must_use]
pub fn display_order(left: &Task, right: &Task) -> Ordering {
    left.status()
        .display_rank()
        .cmp(&right.status().display_rank())
        .then_with(|| right.created_at().cmp(&left.created_at()))
}

/// Sorts tasks in place using [`display_order`].
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(display_order);
}
