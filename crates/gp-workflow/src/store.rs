//! Task store: ordered, per-project task collection.
//!
//! Insertion order is preserved for stable iteration and carries no other
//! meaning. Referential checks against the team and the active template
//! happen one level up, in [`crate::project::Project`].

use gp_core::entities::{MemberId, NewTask, Task, TaskId};
use gp_core::enums::TaskStatus;

use crate::error::WorkflowError;
use crate::ids::IdSequence;

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdSequence,
}

impl TaskStore {
    #[must_use]
    pub fn new(ids: IdSequence) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
        }
    }

    /// Build a store over existing tasks, advancing `ids` past every id seen.
    #[must_use]
    pub fn with_tasks(ids: IdSequence, tasks: Vec<Task>) -> Self {
        if let Some(max) = tasks.iter().map(|task| task.id).max() {
            ids.advance_past(max);
        }
        Self { tasks, ids }
    }

    /// Store a new task under a fresh id.
    ///
    /// The name is trimmed and must be non-empty. A `blocked` payload must
    /// carry a non-empty reason; any other status drops a stray reason.
    pub fn add(&mut self, new: NewTask) -> Result<Task, WorkflowError> {
        let new = new.validated()?;

        let task = Task::from_new(self.ids.next_id(), new);
        tracing::debug!(task_id = task.id, step = %task.workflow_step, status = %task.status, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace the stored record with the same id.
    ///
    /// Rejects records that break the block invariant
    /// (`blocked` ⟺ non-empty reason).
    pub fn update(&mut self, task: Task) -> Result<(), WorkflowError> {
        task.ensure_block_invariant()?;
        let slot = self
            .tasks
            .iter_mut()
            .find(|stored| stored.id == task.id)
            .ok_or(WorkflowError::UnknownTask(task.id))?;
        tracing::debug!(task_id = task.id, status = %task.status, "task updated");
        *slot = task;
        Ok(())
    }

    /// Delete a task. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        tracing::debug!(task_id = id, "task removed");
        Some(self.tasks.remove(index))
    }

    /// Delete every task assigned to `member_id`, returning what was removed.
    pub fn remove_assigned_to(&mut self, member_id: MemberId) -> Vec<Task> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.assigned_to_id == member_id);
        self.tasks = kept;
        if !removed.is_empty() {
            tracing::debug!(member_id, removed = removed.len(), "cascaded task removal");
        }
        removed
    }

    pub(crate) const fn ids(&self) -> &IdSequence {
        &self.ids
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn by_assignee(&self, member_id: MemberId) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.assigned_to_id == member_id)
    }

    pub fn by_step<'a>(&'a self, step_id: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks
            .iter()
            .filter(move |task| task.workflow_step == step_id)
    }

    pub fn by_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status == status)
    }
}
