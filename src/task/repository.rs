//! Ordered task collection mirrored to storage.

use std::collections::HashSet;

use crate::storage::{PersistentStore, Stored};

use super::seed::onboarding_tasks;
use super::task::{normalize_description, normalize_title, Task, TaskError, TaskId};

/// Owns the task list.
///
/// Every mutating operation ends with a synchronous write of the whole list
/// to storage, so the persisted copy is current by the time it returns.
/// Storage failures are logged by `PersistentStore` and do not affect the
/// in-memory list.
#[derive(Debug)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    store: PersistentStore,
    key: String,
}

impl TaskRepository {
    /// Open the repository stored under `key`.
    ///
    /// When nothing is stored under `key` and `seed_on_first_run` is set, the
    /// onboarding tasks are loaded and written back. Anything already stored,
    /// including an empty list, is used after dropping entries that break the
    /// task invariants. Unreadable data yields an empty list and is left
    /// untouched until the next mutation.
    pub fn open(store: PersistentStore, key: impl Into<String>, seed_on_first_run: bool) -> Self {
        let key = key.into();

        let (tasks, seeded) = match store.fetch::<Vec<Task>>(&key) {
            Stored::Found(tasks) => (sanitize_loaded(tasks, &key), false),
            Stored::Missing if seed_on_first_run => {
                tracing::info!("No tasks stored under '{}', seeding onboarding tasks", key);
                (onboarding_tasks(), true)
            }
            Stored::Missing => (Vec::new(), false),
            Stored::Unreadable => {
                tracing::warn!(
                    "Tasks under '{}' could not be read, starting empty without overwriting them",
                    key
                );
                (Vec::new(), false)
            }
        };

        let repo = Self { tasks, store, key };
        if seeded {
            repo.persist();
        }

        tracing::debug!("Opened task repository '{}' with {} tasks", repo.key, repo.len());
        repo
    }

    /// Write the current list to storage.
    fn persist(&self) -> bool {
        self.store.save(&self.key, &self.tasks)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn next_id(&self) -> Result<TaskId, TaskError> {
        match self.tasks.iter().map(|t| t.id).max() {
            None => Ok(TaskId::FIRST),
            Some(max) => max.next().ok_or(TaskError::IdsExhausted(max)),
        }
    }

    /// Add a new, incomplete task at the end of the list.
    pub fn add(&mut self, title: &str, description: &str) -> Result<Task, TaskError> {
        let title = normalize_title(title)?;
        let task = Task::new(self.next_id()?, &title, description)?;
        self.tasks.push(task.clone());
        self.persist();
        tracing::debug!("Added task {}", task.id);
        Ok(task)
    }

    /// Replace the title and description of a task, keeping its id and
    /// completion state.
    pub fn update(&mut self, id: TaskId, title: &str, description: &str) -> Result<Task, TaskError> {
        let title = normalize_title(title)?;
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;

        let task = &mut self.tasks[index];
        task.title = title;
        task.description = normalize_description(description);
        let updated = task.clone();

        self.persist();
        tracing::debug!("Updated task {}", id);
        Ok(updated)
    }

    /// Remove a task. Removing a missing id does nothing.
    ///
    /// Returns whether a task was removed.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.tasks.remove(index);
        self.persist();
        tracing::debug!("Removed task {}", id);
        true
    }

    /// Flip the completion state of a task.
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;

        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        let toggled = task.clone();

        self.persist();
        Ok(toggled)
    }

    /// Snapshot of all tasks in display order.
    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Borrowing iterator over tasks in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Drop stored entries that break the task invariants: blank titles and
/// repeated ids (the first occurrence wins). Titles are re-trimmed.
fn sanitize_loaded(tasks: Vec<Task>, key: &str) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(tasks.len());

    for mut task in tasks {
        let Ok(title) = normalize_title(&task.title) else {
            tracing::warn!("Dropping task {} under '{}': blank title", task.id, key);
            continue;
        };
        if !seen.insert(task.id) {
            tracing::warn!("Dropping task under '{}': duplicate id {}", key, task.id);
            continue;
        }
        task.title = title;
        kept.push(task);
    }

    kept
}
