//! Onboarding tasks for first-time users.

use super::task::{Task, TaskId};

const ONBOARDING: &[(&str, &str, bool)] = &[
    (
        "Welcome to your To-Do List!",
        "This is a sample task to get you started.",
        false,
    ),
    (
        "Add new tasks using the form above",
        "Enter a title and optional description.",
        false,
    ),
    (
        "Mark tasks as complete",
        "Click the checkbox next to a task.",
        true,
    ),
    (
        "Edit or Delete tasks",
        "Use the buttons on the right of each task.",
        false,
    ),
    (
        "Filter tasks",
        "Use the \"All\", \"Completed\", \"Incomplete\" buttons.",
        false,
    ),
    (
        "Search your tasks",
        "Use the search bar to find specific tasks.",
        false,
    ),
    (
        "Toggle Dark/Light Mode",
        "Use the button in the top right.",
        false,
    ),
];

/// The sample tasks shown when storage holds no task list yet.
///
/// Ids run from 1 in order, so the next added task gets `len + 1`.
pub fn onboarding_tasks() -> Vec<Task> {
    ONBOARDING
        .iter()
        .zip(1u64..)
        .map(|(&(title, description, completed), id)| Task {
            id: TaskId(id),
            title: title.to_string(),
            description: Some(description.to_string()),
            completed,
        })
        .collect()
}
