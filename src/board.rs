//! The application state object.
//!
//! `TaskBoard` owns the task repository, the view state and the theme
//! preference, and applies user intents coming from the display layer.
//!
//! Error policy:
//! - blank titles come back as `TaskError::Validation` for the user to see,
//!   and an add with no id left comes back as `TaskError::IdsExhausted`
//! - stale ids are logged and ignored, since a task can disappear between
//!   render and click
//! - storage failures never surface here (see `PersistentStore`)

use crate::config::TaskBoardConfig;
use crate::storage::{PersistentStore, SharedStorage};
use crate::task::{Task, TaskError, TaskId, TaskRepository};
use crate::theme::{Theme, ThemePreference};
use crate::view::{summarize, visible_tasks, FilterMode, TaskStats, ViewState};

/// A user action emitted by the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Form submit: adds a task, or saves the task under edit.
    Submit { title: String, description: String },
    BeginEdit(TaskId),
    CancelEdit,
    Toggle(TaskId),
    RequestDelete(TaskId),
    ConfirmDelete,
    CancelDelete,
    SetFilter(FilterMode),
    SetSearch(String),
    ToggleTheme,
}

#[derive(Debug)]
pub struct TaskBoard {
    repo: TaskRepository,
    view: ViewState,
    theme: ThemePreference,
}

impl TaskBoard {
    /// Open a board over `storage`, loading tasks and theme.
    pub fn open(storage: SharedStorage, config: &TaskBoardConfig) -> Self {
        let store = PersistentStore::new(storage);
        let repo = TaskRepository::open(
            store.clone(),
            config.tasks_key.clone(),
            config.seed_on_first_run,
        );
        let theme = ThemePreference::open(store, config.theme_key.clone());

        tracing::info!(
            "Task board ready: {} tasks, {} theme",
            repo.len(),
            theme.theme()
        );

        Self {
            repo,
            view: ViewState::new(),
            theme,
        }
    }

    /// Apply one user intent.
    ///
    /// Only failures the user has to see are returned (blank title, no id
    /// left); everything else either succeeds or is a logged no-op.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), TaskError> {
        tracing::trace!(?intent, "dispatch");

        let result = match intent {
            Intent::Submit { title, description } => self.submit(&title, &description).map(|_| ()),
            Intent::BeginEdit(id) => {
                self.view.begin_edit(id);
                Ok(())
            }
            Intent::CancelEdit => {
                self.view.cancel_edit();
                Ok(())
            }
            Intent::Toggle(id) => self.repo.toggle_completed(id).map(|_| ()),
            Intent::RequestDelete(id) => {
                self.view.request_delete(id);
                Ok(())
            }
            Intent::ConfirmDelete => {
                self.confirm_delete();
                Ok(())
            }
            Intent::CancelDelete => {
                self.view.cancel_delete();
                Ok(())
            }
            Intent::SetFilter(mode) => {
                self.view.set_filter_mode(mode);
                Ok(())
            }
            Intent::SetSearch(query) => {
                self.view.set_search_query(query);
                Ok(())
            }
            Intent::ToggleTheme => {
                self.theme.toggle();
                Ok(())
            }
        };

        match result {
            Err(TaskError::NotFound(id)) => {
                tracing::warn!("Ignoring action on missing task {}", id);
                Ok(())
            }
            other => other,
        }
    }

    /// Save the form: update the task under edit, or add a new one.
    ///
    /// Leaves edit mode on success. A blank title keeps edit mode so the user
    /// can fix it. If the task under edit vanished, edit mode is dropped and
    /// `NotFound` is returned.
    pub fn submit(&mut self, title: &str, description: &str) -> Result<Task, TaskError> {
        match self.view.editing_task_id() {
            Some(id) => {
                let result = self.repo.update(id, title, description);
                if !matches!(result, Err(TaskError::Validation)) {
                    self.view.cancel_edit();
                }
                result
            }
            None => self.repo.add(title, description),
        }
    }

    /// Carry out a pending deletion, if any.
    pub fn confirm_delete(&mut self) -> Option<TaskId> {
        let removed = self.view.deletion_mut().confirm(&mut self.repo)?;
        if self.view.editing_task_id() == Some(removed) {
            self.view.cancel_edit();
        }
        Some(removed)
    }

    /// Tasks the list should currently show.
    pub fn visible_tasks(&self) -> Vec<Task> {
        visible_tasks(self.repo.as_slice(), &self.view)
    }

    /// Counts over all tasks, regardless of filter and search.
    pub fn stats(&self) -> TaskStats {
        summarize(self.repo.as_slice())
    }

    /// The task being edited, for pre-filling the form.
    pub fn editing_task(&self) -> Option<&Task> {
        self.view.editing_task_id().and_then(|id| self.repo.get(id))
    }

    /// The task awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&Task> {
        self.view.pending_delete_id().and_then(|id| self.repo.get(id))
    }

    pub fn tasks(&self) -> &TaskRepository {
        &self.repo
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }
}
