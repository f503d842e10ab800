use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{MemberId, TaskId};
use crate::enums::TaskStatus;
use crate::errors::CoreError;

/// A unit of work assigned to one team member and tracked against one
/// workflow step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub assigned_to_id: MemberId,
    pub status: TaskStatus,
    /// Step id in the project's workflow template. Not remapped when the
    /// template changes.
    pub workflow_step: String,
    /// Present iff `status == Blocked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    /// Append-only comment log.
    #[serde(default)]
    pub updates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Display-only timezone label, e.g. `America/New_York`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_timezone: Option<String>,
}

impl Task {
    /// Build a stored task from its creation payload.
    #[must_use]
    pub fn from_new(id: TaskId, new: NewTask) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            assigned_to_id: new.assigned_to_id,
            status: new.status,
            workflow_step: new.workflow_step,
            block_reason: new.block_reason,
            updates: Vec::new(),
            due_date: new.due_date,
            due_date_timezone: new.due_date_timezone,
        }
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status == TaskStatus::Blocked
    }

    /// `blocked` ⟺ a non-empty block reason is present.
    #[must_use]
    pub fn block_invariant_holds(&self) -> bool {
        let has_reason = self
            .block_reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty());
        self.is_blocked() == has_reason
    }

    /// [`Self::block_invariant_holds`] as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the invariant is broken.
    pub fn ensure_block_invariant(&self) -> Result<(), CoreError> {
        if self.block_invariant_holds() {
            return Ok(());
        }
        Err(CoreError::Validation(format!(
            "task {} must carry a block reason exactly when it is blocked",
            self.id
        )))
    }

    /// Trim `reason` and check it against the target `status`: `blocked`
    /// needs a non-empty reason, every other status drops it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a missing or blank reason on
    /// `blocked`.
    pub fn normalize_block_reason(
        status: TaskStatus,
        reason: Option<String>,
    ) -> Result<Option<String>, CoreError> {
        if !status.requires_reason() {
            return Ok(None);
        }
        reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty())
            .map(Some)
            .ok_or_else(|| {
                CoreError::Validation(String::from("A reason is required to block a task"))
            })
    }
}

/// Creation payload for a task. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub assigned_to_id: MemberId,
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    pub workflow_step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_timezone: Option<String>,
}

const fn default_status() -> TaskStatus {
    TaskStatus::Todo
}

impl NewTask {
    /// A `todo` task with no description or due date.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        assigned_to_id: MemberId,
        workflow_step: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            assigned_to_id,
            status: TaskStatus::Todo,
            workflow_step: workflow_step.into(),
            block_reason: None,
            due_date: None,
            due_date_timezone: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn blocked(mut self, reason: impl Into<String>) -> Self {
        self.status = TaskStatus::Blocked;
        self.block_reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn due(mut self, at: DateTime<Utc>, timezone: Option<String>) -> Self {
        self.due_date = Some(at);
        self.due_date_timezone = timezone;
        self
    }

    /// Trim the text fields and normalize the block reason.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank name, or for `blocked`
    /// without a reason.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(CoreError::Validation(String::from(
                "Task name is a required field",
            )));
        }
        self.description = self.description.trim().to_string();
        self.block_reason = Task::normalize_block_reason(self.status, self.block_reason)?;
        Ok(self)
    }
}
