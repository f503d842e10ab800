//! Block/unblock subprocess.
//!
//! ```text
//! unblocked --request--> pending-reason --submit(reason)--> blocked
//!                             └------cancel------> unblocked
//! ```
//!
//! At most one request is pending per project. An empty reason leaves the
//! request pending; nothing in the store changes until a valid reason lands.

use gp_core::entities::{Task, TaskId};
use gp_core::enums::TaskStatus;

use crate::error::WorkflowError;
use crate::store::TaskStore;

/// Where a task sits in the block subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Unblocked,
    PendingReason,
    Blocked,
}

#[derive(Debug, Clone, Default)]
pub struct BlockFlow {
    pending: Option<TaskId>,
}

impl BlockFlow {
    /// Task awaiting a block reason, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<TaskId> {
        self.pending
    }

    #[must_use]
    pub fn state_of(&self, task: &Task) -> BlockState {
        if task.is_blocked() {
            BlockState::Blocked
        } else if self.pending == Some(task.id) {
            BlockState::PendingReason
        } else {
            BlockState::Unblocked
        }
    }

    /// Open a block request for `task_id`, replacing any earlier request.
    pub fn request(&mut self, store: &TaskStore, task_id: TaskId) -> Result<(), WorkflowError> {
        if store.get(task_id).is_none() {
            return Err(WorkflowError::UnknownTask(task_id));
        }
        if let Some(previous) = self.pending.replace(task_id) {
            if previous != task_id {
                tracing::debug!(previous, task_id, "block request replaced");
            }
        }
        tracing::debug!(task_id, "block requested");
        Ok(())
    }

    /// Complete the pending request with `reason`.
    ///
    /// On success the task is `blocked` with the trimmed reason and the
    /// request is closed.
    pub fn submit(&mut self, store: &mut TaskStore, reason: &str) -> Result<Task, WorkflowError> {
        let task_id = self.pending.ok_or(WorkflowError::NoPendingBlock)?;
        let reason = Task::normalize_block_reason(TaskStatus::Blocked, Some(reason.to_string()))?;

        let Some(mut task) = store.get(task_id).cloned() else {
            self.pending = None;
            return Err(WorkflowError::UnknownTask(task_id));
        };
        task.status = TaskStatus::Blocked;
        task.block_reason = reason;
        store.update(task.clone())?;
        self.pending = None;
        tracing::debug!(task_id, "task blocked");
        Ok(task)
    }

    /// Abandon the pending request. The task is untouched.
    pub fn cancel(&mut self) -> Option<TaskId> {
        let cancelled = self.pending.take();
        if let Some(task_id) = cancelled {
            tracing::debug!(task_id, "block request cancelled");
        }
        cancelled
    }

    /// Forget a pending request for a task that no longer exists.
    pub(crate) fn forget(&mut self, task_id: TaskId) {
        if self.pending == Some(task_id) {
            self.pending = None;
        }
    }
}
