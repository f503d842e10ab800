//! Step-status deriver.
//!
//! Maps `(template, tasks)` to one [`StepStatus`] per step. Pure: the result
//! depends on nothing but its inputs and is recomputed on every observation.
//!
//! For the tasks `S` filed against a step, first match wins:
//!
//! | # | condition                         | status     |
//! |---|-----------------------------------|------------|
//! | 1 | `S` is empty                      | `upcoming` |
//! | 2 | any task is `blocked`             | `blocked`  |
//! | 3 | every task is `done`              | `complete` |
//! | 4 | any task is `inprogress`          | `current`  |
//! | 5 | every task is `todo` or `done`    | `todo`     |
//! | 6 | anything else                     | `current`  |
//!
//! A single blocked task therefore halts an otherwise finished step.

use gp_core::entities::{Task, WorkflowTemplate};
use gp_core::enums::{StepStatus, TaskStatus};
use gp_core::responses::StepView;

/// Per-step statuses in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStatusMap {
    entries: Vec<(String, StepStatus)>,
}

impl StepStatusMap {
    /// Status of `step_id`, or `None` if the template has no such step.
    #[must_use]
    pub fn get(&self, step_id: &str) -> Option<StepStatus> {
        self.entries
            .iter()
            .find(|(id, _)| id == step_id)
            .map(|(_, status)| *status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StepStatus)> {
        self.entries
            .iter()
            .map(|(id, status)| (id.as_str(), *status))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregate status of one step from the tasks filed against it.
#[must_use]
pub fn step_status<'a, I>(tasks: I) -> StepStatus
where
    I: IntoIterator<Item = &'a Task>,
{
    let statuses: Vec<TaskStatus> = tasks.into_iter().map(|task| task.status).collect();

    if statuses.is_empty() {
        StepStatus::Upcoming
    } else if statuses.contains(&TaskStatus::Blocked) {
        StepStatus::Blocked
    } else if statuses.iter().all(|status| *status == TaskStatus::Done) {
        StepStatus::Complete
    } else if statuses.contains(&TaskStatus::InProgress) {
        StepStatus::Current
    } else if statuses
        .iter()
        .all(|status| matches!(status, TaskStatus::Todo | TaskStatus::Done))
    {
        StepStatus::Todo
    } else {
        // Unreachable with the current four statuses; kept as the fallback
        // should a new task status appear.
        StepStatus::Current
    }
}

/// Derive every step's status for `template` from `tasks`.
///
/// Tasks whose step is not in the template are ignored here; see
/// [`orphaned_tasks`].
#[must_use]
pub fn derive_statuses(template: &WorkflowTemplate, tasks: &[Task]) -> StepStatusMap {
    let entries = template
        .steps
        .iter()
        .map(|step| {
            let status = step_status(tasks.iter().filter(|task| task.workflow_step == step.id));
            (step.id.clone(), status)
        })
        .collect();
    StepStatusMap { entries }
}

/// Tasks filed against a step the template does not have.
pub fn orphaned_tasks<'a>(
    template: &'a WorkflowTemplate,
    tasks: &'a [Task],
) -> impl Iterator<Item = &'a Task> {
    tasks
        .iter()
        .filter(|task| !template.contains_step(&task.workflow_step))
}

/// Workflow diagram rows for `template`.
#[must_use]
pub fn step_views(template: &WorkflowTemplate, tasks: &[Task]) -> Vec<StepView> {
    let statuses = derive_statuses(template, tasks);
    template
        .steps
        .iter()
        .map(|step| {
            let status = statuses.get(&step.id).unwrap_or(StepStatus::Upcoming);
            let is_terminal = template.is_terminal(&step.id);
            StepView {
                step_id: step.id.clone(),
                title: step.title.clone(),
                description: step.description.clone(),
                icon: step.icon.clone(),
                status,
                task_count: tasks
                    .iter()
                    .filter(|task| task.workflow_step == step.id)
                    .count(),
                is_terminal,
                connector_filled: !is_terminal && status.fills_connector(),
            }
        })
        .collect()
}
