//! Workflow error types for gp-workflow.

use gp_core::entities::{MemberId, ProjectId, TaskId};
use gp_core::enums::TaskStatus;
use gp_core::errors::CoreError;
use thiserror::Error;

/// Errors from workflow operations. None of them leave partial mutations
/// behind: the triggering transition is aborted.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// User input failed validation (empty name, empty block reason, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown team member: {0}")]
    UnknownMember(MemberId),

    #[error("Unknown task: {0}")]
    UnknownTask(TaskId),

    #[error("Unknown project: {0}")]
    UnknownProject(ProjectId),

    #[error("Unknown workflow template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown step '{step_id}' in template '{template_id}'")]
    UnknownStep {
        template_id: String,
        step_id: String,
    },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Built-in templates cannot be edited or deleted.
    #[error("Workflow template '{0}' is built-in and cannot be modified")]
    ImmutableTemplate(String),

    #[error("Workflow template '{0}' already exists")]
    DuplicateTemplate(String),

    #[error("Step '{step_id}' already exists in template '{template_id}'")]
    DuplicateStep {
        template_id: String,
        step_id: String,
    },

    #[error("Role '{0}' already exists")]
    DuplicateRole(String),

    #[error("Role '{role_id}' is still held by {members} team member(s)")]
    RoleInUse { role_id: String, members: usize },

    /// Only the assignee may move a task card.
    #[error("Task {task_id} is assigned to member {assignee}, not member {user}")]
    NotAssignee {
        task_id: TaskId,
        assignee: MemberId,
        user: MemberId,
    },

    /// Direct status writes may not enter `blocked`; use the block flow.
    #[error("Task {task_id} cannot move from {from} to {to} directly")]
    InvalidTransition {
        task_id: TaskId,
        from: TaskStatus,
        to: TaskStatus,
    },

    #[error("No block request is pending")]
    NoPendingBlock,

    /// Entity-level failure other than validation.
    #[error(transparent)]
    Core(CoreError),
}

/// Entity validation surfaces as [`WorkflowError::Validation`] so callers
/// match one variant regardless of which layer rejected the input.
impl From<CoreError> for WorkflowError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            other => Self::Core(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_validation_maps_to_validation() {
        let err = WorkflowError::from(CoreError::Validation(String::from("blank")));
        assert!(matches!(err, WorkflowError::Validation(ref m) if m == "blank"));

        let err = WorkflowError::from(CoreError::NotFound {
            entity_type: String::from("task"),
            id: String::from("9"),
        });
        assert_eq!(err.to_string(), "Entity not found: task 9");
    }
}
