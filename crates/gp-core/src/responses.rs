//! View types returned by the workflow controllers and printed by `gpa`.
//!
//! These are derived on every observation from the task store and the active
//! template; nothing here is stored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{MemberId, ProjectId, TaskId};
use crate::enums::{BoardScope, DueUrgency, StepStatus, TaskStatus};

/// One row of the workflow diagram.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StepView {
    pub step_id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub status: StepStatus,
    pub task_count: usize,
    pub is_terminal: bool,
    /// Whether the connector to the next step is drawn in the step's color.
    /// Always `false` on the terminal step, which has no connector.
    pub connector_filled: bool,
}

/// Response from `gpa steps`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkflowOverview {
    pub project_id: ProjectId,
    pub template_id: String,
    pub template_name: String,
    pub steps: Vec<StepView>,
    /// Tasks whose step is not part of the active template.
    pub orphaned_tasks: Vec<TaskId>,
}

/// Due-date badge shown on cards and summaries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DueBadge {
    pub urgency: DueUrgency,
    pub display: String,
}

/// A task card on the Kanban board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardCard {
    pub task_id: TaskId,
    pub name: String,
    pub assignee_id: MemberId,
    /// `None` when the assignee no longer resolves.
    pub assignee_avatar: Option<String>,
    pub draggable: bool,
    pub block_reason: Option<String>,
    pub due: Option<DueBadge>,
}

/// One status lane of the Kanban board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardLane {
    pub status: TaskStatus,
    pub title: String,
    pub cards: Vec<BoardCard>,
}

/// Response from `gpa board`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardView {
    pub project_id: ProjectId,
    pub scope: BoardScope,
    pub current_user_id: MemberId,
    pub lanes: Vec<BoardLane>,
}

impl BoardView {
    #[must_use]
    pub fn lane(&self, status: TaskStatus) -> Option<&BoardLane> {
        self.lanes.iter().find(|lane| lane.status == status)
    }
}

/// A blocked task listed when a blocked step is activated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BlockedTaskEntry {
    pub task_id: TaskId,
    pub name: String,
    pub assignee_name: Option<String>,
    pub reason: String,
}

/// An active (`todo`/`inprogress`) task listed in a step summary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActiveTaskEntry {
    pub task_id: TaskId,
    pub name: String,
    pub status: TaskStatus,
    pub assignee_name: Option<String>,
    pub due: Option<DueBadge>,
}

/// Response from `gpa activate`: what clicking a step opens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum StepActivation {
    /// Read-only listing of the step's blocked tasks.
    Blocked {
        step_id: String,
        step_title: String,
        tasks: Vec<BlockedTaskEntry>,
        /// Names of the stakeholders notified by this activation.
        notified: Vec<String>,
    },
    /// Active-work summary; done and blocked tasks are excluded.
    Summary {
        step_id: String,
        step_title: String,
        description: String,
        active_tasks: Vec<ActiveTaskEntry>,
    },
}

/// Response from `gpa projects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub template_id: String,
    pub team_size: usize,
    pub task_count: usize,
    pub active: bool,
}
