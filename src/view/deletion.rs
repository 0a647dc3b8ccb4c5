//! Two-step task deletion.

use crate::task::{TaskId, TaskRepository};

/// Delete confirmation state machine.
///
/// ```text
/// Idle --request(id)--> PendingConfirmation(id)
/// PendingConfirmation(id) --confirm--> Idle   (task removed)
/// PendingConfirmation(id) --cancel--> Idle    (nothing removed)
/// ```
///
/// Leaving `PendingConfirmation` always drops the id, so a later `confirm`
/// cannot act on a stale request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletionWorkflow {
    #[default]
    Idle,
    PendingConfirmation(TaskId),
}

impl DeletionWorkflow {
    /// Mark `id` for deletion. A second request replaces the first.
    pub fn request(&mut self, id: TaskId) {
        *self = Self::PendingConfirmation(id);
    }

    /// Delete the pending task and return to `Idle`.
    ///
    /// Returns the id that was confirmed, or `None` if nothing was pending.
    /// A pending id whose task already vanished still returns to `Idle`.
    pub fn confirm(&mut self, repo: &mut TaskRepository) -> Option<TaskId> {
        let id = self.pending()?;
        *self = Self::Idle;
        if !repo.remove(id) {
            tracing::debug!("Confirmed deletion of task {} which no longer exists", id);
        }
        Some(id)
    }

    /// Drop the pending request without touching the repository.
    pub fn cancel(&mut self) -> Option<TaskId> {
        let id = self.pending();
        *self = Self::Idle;
        id
    }

    /// The task awaiting confirmation, if any.
    pub fn pending(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::PendingConfirmation(id) => Some(*id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
