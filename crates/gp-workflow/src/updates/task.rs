//! Task update builder.

use chrono::{DateTime, Utc};
use gp_core::entities::MemberId;
use gp_core::enums::TaskStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<MemberId>,
    /// Must not be `blocked`; entering `blocked` goes through the block flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_timezone: Option<Option<String>>,
    /// Appended to the task's comment log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TaskUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.assigned_to_id.is_none()
            && self.status.is_none()
            && self.workflow_step.is_none()
            && self.due_date.is_none()
            && self.due_date_timezone.is_none()
            && self.comment.is_none()
    }
}

#[derive(Debug, Default)]
pub struct TaskUpdateBuilder(TaskUpdate);

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn reassign(mut self, member_id: MemberId) -> Self {
        self.0.assigned_to_id = Some(member_id);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn step(mut self, step_id: impl Into<String>) -> Self {
        self.0.workflow_step = Some(step_id.into());
        self
    }

    #[must_use]
    pub fn due_date(mut self, due: Option<DateTime<Utc>>) -> Self {
        self.0.due_date = Some(due);
        self
    }

    #[must_use]
    pub fn due_date_timezone(mut self, timezone: Option<String>) -> Self {
        self.0.due_date_timezone = Some(timezone);
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.0.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_noop() {
        assert!(TaskUpdateBuilder::new().build().is_empty());
    }

    #[test]
    fn serializes_only_changed_fields() {
        let update = TaskUpdateBuilder::new()
            .status(TaskStatus::Done)
            .due_date(None)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "done", "due_date": null }));
    }
}
