//! Project container: one team, one task store, one active template id.
//!
//! Every task mutation goes through here so that assignees always resolve
//! against the team and new steps always exist in the active template.

use std::fmt::Write as _;

use gp_core::entities::{
    AnalysisResult, MemberId, NewTask, ProjectId, Task, TaskId, TeamMember, WorkflowTemplate,
};
use gp_core::enums::{StepStatus, TaskStatus};
use gp_core::responses::{ActiveTaskEntry, BlockedTaskEntry, ProjectSummary, StepActivation};

use crate::block::{BlockFlow, BlockState};
use crate::derive::{self, orphaned_tasks};
use crate::due::DueClock;
use crate::error::WorkflowError;
use crate::ids::IdSequence;
use crate::notify::Notifier;
use crate::store::TaskStore;
use crate::updates::task::TaskUpdate;

/// Per-project scratch state for the document and diagram tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectWorkspace {
    pub documents: Vec<String>,
    pub analysis: Option<AnalysisResult>,
    pub diagram_prompt: String,
    pub diagram_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    template_id: String,
    owner_id: MemberId,
    team: Vec<TeamMember>,
    tasks: TaskStore,
    block: BlockFlow,
    pub workspace: ProjectWorkspace,
}

impl Project {
    /// A project whose team starts with `owner`.
    #[must_use]
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        template_id: impl Into<String>,
        owner: TeamMember,
        ids: IdSequence,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            template_id: template_id.into(),
            owner_id: owner.id,
            team: vec![owner],
            tasks: TaskStore::new(ids),
            block: BlockFlow::default(),
            workspace: ProjectWorkspace::default(),
        }
    }

    /// Add more members and pre-existing tasks, e.g. from seed data.
    ///
    /// Tasks are trusted as-is; the shared id sequence is advanced past them.
    #[must_use]
    pub fn with_roster(mut self, members: Vec<TeamMember>, tasks: Vec<Task>) -> Self {
        for member in members {
            if self.member(member.id).is_none() {
                self.team.push(member);
            }
        }
        self.tasks = TaskStore::with_tasks(self.tasks.ids().clone(), tasks);
        self
    }

    #[must_use]
    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Default current user for board authorization.
    #[must_use]
    pub const fn owner_id(&self) -> MemberId {
        self.owner_id
    }

    #[must_use]
    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    #[must_use]
    pub fn member(&self, member_id: MemberId) -> Option<&TeamMember> {
        self.team.iter().find(|member| member.id == member_id)
    }

    pub fn require_member(&self, member_id: MemberId) -> Result<&TeamMember, WorkflowError> {
        self.member(member_id)
            .ok_or(WorkflowError::UnknownMember(member_id))
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    #[must_use]
    pub const fn block_flow(&self) -> &BlockFlow {
        &self.block
    }

    #[must_use]
    pub fn block_state(&self, task_id: TaskId) -> Option<BlockState> {
        self.tasks.get(task_id).map(|task| self.block.state_of(task))
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Create a task after checking its assignee and step.
    pub fn add_task(
        &mut self,
        template: &WorkflowTemplate,
        new: NewTask,
    ) -> Result<Task, WorkflowError> {
        self.require_member(new.assigned_to_id)?;
        require_step(template, &new.workflow_step)?;
        self.tasks.add(new)
    }

    /// Apply a partial update. The whole update is rejected if any field is.
    ///
    /// Changing the status or the assignee closes a pending block request
    /// for the task.
    pub fn update_task(
        &mut self,
        template: &WorkflowTemplate,
        task_id: TaskId,
        update: TaskUpdate,
    ) -> Result<Task, WorkflowError> {
        let before = self
            .tasks
            .get(task_id)
            .cloned()
            .ok_or(WorkflowError::UnknownTask(task_id))?;
        let mut task = before.clone();

        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(WorkflowError::Validation(String::from(
                    "Task name is a required field",
                )));
            }
            task.name = name.to_string();
        }
        if let Some(description) = update.description {
            task.description = description.trim().to_string();
        }
        if let Some(member_id) = update.assigned_to_id {
            self.require_member(member_id)?;
            task.assigned_to_id = member_id;
        }
        if let Some(step_id) = update.workflow_step {
            require_step(template, &step_id)?;
            task.workflow_step = step_id;
        }
        if let Some(status) = update.status {
            apply_status(&mut task, status)?;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        if let Some(timezone) = update.due_date_timezone {
            task.due_date_timezone = timezone;
        }
        if let Some(comment) = update.comment {
            let comment = comment.trim();
            if comment.is_empty() {
                return Err(WorkflowError::Validation(String::from(
                    "Comment cannot be empty",
                )));
            }
            task.updates.push(comment.to_string());
        }

        let closes_request =
            task.status != before.status || task.assigned_to_id != before.assigned_to_id;
        self.tasks.update(task.clone())?;
        if closes_request {
            self.block.forget(task_id);
        }
        Ok(task)
    }

    /// Move a task to a non-blocked status, clearing any block reason.
    ///
    /// A pending block request for the task is closed if the status changes.
    pub fn set_status(&mut self, task_id: TaskId, status: TaskStatus) -> Result<Task, WorkflowError> {
        let mut task = self
            .tasks
            .get(task_id)
            .cloned()
            .ok_or(WorkflowError::UnknownTask(task_id))?;
        let from = task.status;
        apply_status(&mut task, status)?;
        self.tasks.update(task.clone())?;
        if task.status != from {
            self.block.forget(task_id);
        }
        Ok(task)
    }

    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        self.block.forget(task_id);
        self.tasks.remove(task_id)
    }

    // -----------------------------------------------------------------------
    // Block subprocess
    // -----------------------------------------------------------------------

    pub fn request_block(&mut self, task_id: TaskId) -> Result<(), WorkflowError> {
        self.block.request(&self.tasks, task_id)
    }

    pub fn submit_block_reason(&mut self, reason: &str) -> Result<Task, WorkflowError> {
        self.block.submit(&mut self.tasks, reason)
    }

    pub fn cancel_block(&mut self) -> Option<TaskId> {
        self.block.cancel()
    }

    // -----------------------------------------------------------------------
    // Team
    // -----------------------------------------------------------------------

    pub fn add_member(&mut self, member: TeamMember) -> Result<(), WorkflowError> {
        if self.member(member.id).is_some() {
            return Err(WorkflowError::Validation(format!(
                "{} is already on this team",
                member.name
            )));
        }
        tracing::debug!(project_id = self.id, member_id = member.id, "member assigned");
        self.team.push(member);
        Ok(())
    }

    /// Remove a member and every task assigned to them.
    pub fn remove_member(&mut self, member_id: MemberId) -> Result<(TeamMember, Vec<Task>), WorkflowError> {
        let index = self
            .team
            .iter()
            .position(|member| member.id == member_id)
            .ok_or(WorkflowError::UnknownMember(member_id))?;
        let member = self.team.remove(index);
        let removed = self.tasks.remove_assigned_to(member_id);
        for task in &removed {
            self.block.forget(task.id);
        }
        tracing::debug!(
            project_id = self.id,
            member_id,
            tasks_removed = removed.len(),
            "member removed"
        );
        Ok((member, removed))
    }

    /// Replace the stored profile of `member.id`. Returns whether it was found.
    pub(crate) fn replace_member(&mut self, member: &TeamMember) -> bool {
        match self.team.iter_mut().find(|m| m.id == member.id) {
            Some(slot) => {
                slot.clone_from(member);
                true
            }
            None => false,
        }
    }

    pub(crate) fn count_role_holders(&self, role_id: &str) -> usize {
        self.team.iter().filter(|m| m.role_id == role_id).count()
    }

    // -----------------------------------------------------------------------
    // Template and step views
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn orphaned_tasks<'a>(&'a self, template: &'a WorkflowTemplate) -> Vec<&'a Task> {
        orphaned_tasks(template, self.tasks.as_slice()).collect()
    }

    /// Point the project at another template. Tasks keep their step ids;
    /// returns how many are now orphaned.
    pub fn change_template(&mut self, template: &WorkflowTemplate) -> usize {
        self.template_id.clone_from(&template.id);
        let orphans = orphaned_tasks(template, self.tasks.as_slice()).count();
        if orphans > 0 {
            tracing::warn!(
                project_id = self.id,
                template_id = %template.id,
                orphans,
                "tasks reference steps missing from the new template"
            );
        } else {
            tracing::debug!(project_id = self.id, template_id = %template.id, "template changed");
        }
        orphans
    }

    /// What clicking `step_id` opens.
    ///
    /// A blocked step lists its blocked tasks and notifies every stakeholder
    /// on the team, on every activation.
    pub fn activate_step(
        &self,
        template: &WorkflowTemplate,
        step_id: &str,
        clock: &DueClock,
        stakeholder_roles: &[String],
        notifier: &dyn Notifier,
    ) -> Result<StepActivation, WorkflowError> {
        let step = require_step(template, step_id)?;
        let in_step: Vec<&Task> = self.tasks.by_step(step_id).collect();

        if derive::step_status(in_step.iter().copied()) == StepStatus::Blocked {
            let tasks = in_step
                .iter()
                .filter(|task| task.is_blocked())
                .map(|task| BlockedTaskEntry {
                    task_id: task.id,
                    name: task.name.clone(),
                    assignee_name: self.assignee_name(task),
                    reason: task.block_reason.clone().unwrap_or_default(),
                })
                .collect();
            let notified: Vec<String> = self
                .team
                .iter()
                .filter(|member| stakeholder_roles.contains(&member.role_id))
                .map(|member| member.name.clone())
                .collect();

            let mut message = format!("(Mock) Email sent for blocked step: \"{}\".", step.title);
            if !notified.is_empty() {
                let _ = write!(message, " Notified {}.", notified.join(" and "));
            }
            notifier.notify(&message);

            return Ok(StepActivation::Blocked {
                step_id: step.id.clone(),
                step_title: step.title.clone(),
                tasks,
                notified,
            });
        }

        let active_tasks = in_step
            .iter()
            .filter(|task| task.status.is_active())
            .map(|task| ActiveTaskEntry {
                task_id: task.id,
                name: task.name.clone(),
                status: task.status,
                assignee_name: self.assignee_name(task),
                due: clock.badge(task),
            })
            .collect();
        Ok(StepActivation::Summary {
            step_id: step.id.clone(),
            step_title: step.title.clone(),
            description: step.description.clone(),
            active_tasks,
        })
    }

    #[must_use]
    pub fn summary(&self, active: bool) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            template_id: self.template_id.clone(),
            team_size: self.team.len(),
            task_count: self.tasks.len(),
            active,
        }
    }

    fn assignee_name(&self, task: &Task) -> Option<String> {
        self.member(task.assigned_to_id).map(|m| m.name.clone())
    }

    pub(crate) fn board_parts_mut(&mut self) -> (&mut TaskStore, &mut BlockFlow) {
        (&mut self.tasks, &mut self.block)
    }
}

fn require_step<'a>(
    template: &'a WorkflowTemplate,
    step_id: &str,
) -> Result<&'a gp_core::entities::WorkflowStepDefinition, WorkflowError> {
    template.step(step_id).ok_or_else(|| WorkflowError::UnknownStep {
        template_id: template.id.clone(),
        step_id: step_id.to_string(),
    })
}

/// Direct status writes never enter `blocked`; leaving it drops the reason.
fn apply_status(task: &mut Task, status: TaskStatus) -> Result<(), WorkflowError> {
    if status == TaskStatus::Blocked {
        if task.is_blocked() {
            return Ok(());
        }
        return Err(WorkflowError::InvalidTransition {
            task_id: task.id,
            from: task.status,
            to: status,
        });
    }
    tracing::debug!(task_id = task.id, from = %task.status, to = %status, "status changed");
    task.status = status;
    task.block_reason = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::seed;
    use crate::updates::task::TaskUpdateBuilder;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn template() -> WorkflowTemplate {
        seed::templates()
            .into_iter()
            .find(|t| t.id == "standard-rfi")
            .unwrap()
    }

    fn member(id: MemberId, name: &str, role_id: &str) -> TeamMember {
        TeamMember {
            id,
            name: name.into(),
            role_id: role_id.into(),
            avatar: TeamMember::initials(name),
            email: TeamMember::mock_email(name),
            title: String::new(),
            can_manage_roles: false,
        }
    }

    fn project() -> Project {
        let mut project = Project::new(
            1,
            "Phoenix",
            "",
            "standard-rfi",
            member(1, "Alex Johnson", "capture_manager"),
            IdSequence::default(),
        );
        project.add_member(member(2, "Brenda Smith", "writer")).unwrap();
        project
            .add_member(member(4, "Diana Ross", "strategic_reviewer"))
            .unwrap();
        project
    }

    fn clock() -> DueClock {
        DueClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(), 48)
    }

    fn stakeholders() -> Vec<String> {
        vec!["capture_manager".into(), "strategic_reviewer".into()]
    }

    #[test]
    fn add_task_validates_assignee_and_step() {
        let mut project = project();
        let template = template();
        assert!(matches!(
            project.add_task(&template, NewTask::new("Draft", 9, "drafting")),
            Err(WorkflowError::UnknownMember(9))
        ));
        assert!(matches!(
            project.add_task(&template, NewTask::new("Draft", 2, "red-team")),
            Err(WorkflowError::UnknownStep { .. })
        ));
        assert!(project.tasks().is_empty());
        project
            .add_task(&template, NewTask::new("Draft", 2, "drafting"))
            .unwrap();
        assert_eq!(project.tasks().len(), 1);
    }

    #[test]
    fn update_applies_all_fields_or_none() {
        let mut project = project();
        let template = template();
        let task = project
            .add_task(&template, NewTask::new("Draft", 2, "drafting"))
            .unwrap();

        let bad = TaskUpdateBuilder::new()
            .name("Draft C")
            .reassign(42)
            .build();
        assert!(project.update_task(&template, task.id, bad).is_err());
        assert_eq!(project.task(task.id).unwrap().name, "Draft");

        let due = Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap();
        let good = TaskUpdateBuilder::new()
            .name("Draft C")
            .reassign(1)
            .step("review")
            .due_date(Some(due))
            .due_date_timezone(Some("America/New_York".into()))
            .comment("  first pass done ")
            .build();
        let updated = project.update_task(&template, task.id, good).unwrap();
        assert_eq!(updated.name, "Draft C");
        assert_eq!(updated.assigned_to_id, 1);
        assert_eq!(updated.workflow_step, "review");
        assert_eq!(updated.due_date, Some(due));
        assert_eq!(updated.updates, ["first pass done"]);
    }

    #[test]
    fn direct_status_write_cannot_enter_blocked() {
        let mut project = project();
        let task = project
            .add_task(&template(), NewTask::new("Draft", 2, "drafting"))
            .unwrap();
        assert!(matches!(
            project.set_status(task.id, TaskStatus::Blocked),
            Err(WorkflowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn leaving_blocked_clears_reason() {
        let mut project = project();
        let task = project
            .add_task(&template(), NewTask::new("Review", 4, "review"))
            .unwrap();
        project.request_block(task.id).unwrap();
        project.submit_block_reason("legal hold").unwrap();

        let task = project.set_status(task.id, TaskStatus::InProgress).unwrap();
        assert_eq!(task.block_reason, None);
        assert!(task.block_invariant_holds());
    }

    #[test]
    fn removing_member_cascades_tasks() {
        let mut project = project();
        let template = template();
        let owned = project
            .add_task(&template, NewTask::new("A", 2, "drafting"))
            .unwrap();
        project
            .add_task(&template, NewTask::new("B", 2, "review"))
            .unwrap();
        project
            .add_task(&template, NewTask::new("C", 1, "intake"))
            .unwrap();
        project.request_block(owned.id).unwrap();

        let (member, removed) = project.remove_member(2).unwrap();
        assert_eq!(member.name, "Brenda Smith");
        assert_eq!(removed.len(), 2);
        assert_eq!(project.tasks().by_assignee(2).count(), 0);
        assert_eq!(project.block_flow().pending(), None);
        assert!(matches!(
            project.remove_member(2),
            Err(WorkflowError::UnknownMember(2))
        ));
    }

    #[test]
    fn blocked_activation_notifies_stakeholders_every_time() {
        let mut project = project();
        let template = template();
        let task = project
            .add_task(&template, NewTask::new("Pink team", 4, "review"))
            .unwrap();
        project
            .add_task(
                &template,
                NewTask::new("Edits", 2, "review").status(TaskStatus::Done),
            )
            .unwrap();
        project.request_block(task.id).unwrap();
        project.submit_block_reason("legal hold").unwrap();

        let notifier = RecordingNotifier::new();
        let view = project
            .activate_step(&template, "review", &clock(), &stakeholders(), &notifier)
            .unwrap();
        project
            .activate_step(&template, "review", &clock(), &stakeholders(), &notifier)
            .unwrap();

        let StepActivation::Blocked { tasks, notified, .. } = view else {
            panic!("expected blocked view");
        };
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].reason, "legal hold");
        assert_eq!(notified, ["Alex Johnson", "Diana Ross"]);
        let messages = notifier.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0],
            "(Mock) Email sent for blocked step: \"Strategic Review (Pink Team)\". \
             Notified Alex Johnson and Diana Ross."
        );
    }

    #[test]
    fn summary_lists_only_active_tasks() {
        let mut project = project();
        let template = template();
        let soon = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap() + Duration::hours(3);
        project
            .add_task(
                &template,
                NewTask::new("Outline", 2, "drafting").due(soon, Some("UTC".into())),
            )
            .unwrap();
        project
            .add_task(
                &template,
                NewTask::new("Tables", 2, "drafting").status(TaskStatus::Done),
            )
            .unwrap();

        let notifier = RecordingNotifier::new();
        let view = project
            .activate_step(&template, "drafting", &clock(), &stakeholders(), &notifier)
            .unwrap();
        let StepActivation::Summary { active_tasks, .. } = view else {
            panic!("expected summary view");
        };
        assert_eq!(active_tasks.len(), 1);
        assert_eq!(active_tasks[0].name, "Outline");
        assert_eq!(active_tasks[0].assignee_name.as_deref(), Some("Brenda Smith"));
        assert_eq!(
            active_tasks[0].due.as_ref().map(|b| b.urgency),
            Some(gp_core::enums::DueUrgency::DueSoon)
        );
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn template_change_reports_orphans_without_remapping() {
        let mut project = project();
        let standard = template();
        let complex = seed::templates()
            .into_iter()
            .find(|t| t.id == "complex-rfp")
            .unwrap();
        let task = project
            .add_task(&standard, NewTask::new("Draft", 2, "drafting"))
            .unwrap();

        assert_eq!(project.change_template(&complex), 1);
        assert_eq!(project.template_id(), "complex-rfp");
        assert_eq!(project.task(task.id).unwrap().workflow_step, "drafting");
        let orphans: Vec<_> = project.orphaned_tasks(&complex).iter().map(|t| t.id).collect();
        assert_eq!(orphans, [task.id]);
    }

    #[test]
    fn status_change_closes_pending_block_request() {
        let mut project = project();
        let template = template();
        let task = project
            .add_task(&template, NewTask::new("Pricing", 1, "drafting"))
            .unwrap();

        project.request_block(task.id).unwrap();
        project.set_status(task.id, TaskStatus::Done).unwrap();
        assert_eq!(project.block_flow().pending(), None);
        assert!(matches!(
            project.submit_block_reason("late"),
            Err(WorkflowError::NoPendingBlock)
        ));
        assert_eq!(project.task(task.id).unwrap().status, TaskStatus::Done);

        project.request_block(task.id).unwrap();
        let update = TaskUpdateBuilder::new().status(TaskStatus::InProgress).build();
        project.update_task(&template, task.id, update).unwrap();
        assert_eq!(project.block_flow().pending(), None);
    }

    #[test]
    fn reassignment_closes_request_but_comment_does_not() {
        let mut project = project();
        let template = template();
        let task = project
            .add_task(&template, NewTask::new("Pricing", 1, "drafting"))
            .unwrap();

        project.request_block(task.id).unwrap();
        let comment = TaskUpdateBuilder::new().comment("still waiting").build();
        project.update_task(&template, task.id, comment).unwrap();
        assert_eq!(project.block_flow().pending(), Some(task.id));

        let same_status = TaskUpdateBuilder::new().status(TaskStatus::Todo).build();
        project.update_task(&template, task.id, same_status).unwrap();
        assert_eq!(project.block_flow().pending(), Some(task.id));

        let handoff = TaskUpdateBuilder::new().reassign(2).build();
        project.update_task(&template, task.id, handoff).unwrap();
        assert_eq!(project.block_flow().pending(), None);
    }
}
