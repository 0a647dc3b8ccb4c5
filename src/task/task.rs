//! Core task types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Stable identifier of a task within the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// The id handed to the first task of an empty collection.
    pub const FIRST: TaskId = TaskId(1);

    /// The id that follows this one, `None` past the largest id.
    pub fn next(self) -> Option<TaskId> {
        self.0.checked_add(1).map(TaskId)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId(value)
    }
}

/// Errors from task operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The title was empty after trimming. Shown to the user; nothing changed.
    #[error("Task title is required")]
    Validation,

    /// The id does not name a task (it may have gone stale since render).
    #[error("Task {0} not found")]
    NotFound(TaskId),

    /// The largest stored id leaves no room for another one.
    #[error("No task id available after {0}")]
    IdsExhausted(TaskId),
}

/// A single to-do item.
///
/// Invariants:
/// - `title` is trimmed and non-empty
/// - `description` is trimmed, and `None` rather than empty
/// - `id` never changes once assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(
        default,
        serialize_with = "serialize_description",
        deserialize_with = "deserialize_description"
    )]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Build a new, incomplete task from user input.
    ///
    /// Fails with `TaskError::Validation` when the title is blank.
    pub fn new(id: TaskId, title: &str, description: &str) -> Result<Self, TaskError> {
        Ok(Self {
            id,
            title: normalize_title(title)?,
            description: normalize_description(description),
            completed: false,
        })
    }

    /// Whether the task has a description worth showing or searching.
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }
}

/// Trim a title, rejecting blank input.
pub(crate) fn normalize_title(title: &str) -> Result<String, TaskError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::Validation);
    }
    Ok(trimmed.to_string())
}

/// Trim a description, mapping blank input to `None`.
pub(crate) fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Stored blobs always carry a description string, "" when absent.
fn serialize_description<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn deserialize_description<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| normalize_description(&s)))
}
