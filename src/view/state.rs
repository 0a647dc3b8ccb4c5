//! Transient view state: filter, search, edit and delete selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::deletion::DeletionWorkflow;
use crate::task::TaskId;

/// Which tasks to show by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [Self::All, Self::Completed, Self::Incomplete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "incomplete" => Ok(Self::Incomplete),
            other => Err(format!("Unknown filter mode: {}", other)),
        }
    }
}

/// What the user is currently looking at and working on.
///
/// Not persisted. Ids passed to `begin_edit` and `request_delete` are not
/// checked here; the operation that consumes them does that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    filter_mode: FilterMode,
    search_query: String,
    editing_task_id: Option<TaskId>,
    deletion: DeletionWorkflow,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn editing_task_id(&self) -> Option<TaskId> {
        self.editing_task_id
    }

    pub fn pending_delete_id(&self) -> Option<TaskId> {
        self.deletion.pending()
    }

    pub fn deletion(&self) -> &DeletionWorkflow {
        &self.deletion
    }

    pub fn deletion_mut(&mut self) -> &mut DeletionWorkflow {
        &mut self.deletion
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn begin_edit(&mut self, id: TaskId) {
        self.editing_task_id = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing_task_id = None;
    }

    pub fn request_delete(&mut self, id: TaskId) {
        self.deletion.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }
}
