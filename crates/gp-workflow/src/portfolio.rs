//! Portfolio: every project plus the registries they share.
//!
//! Exactly one project is active. Switching swaps the team, task store and
//! template that every board, step and block operation acts on; the project
//! left behind is not touched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gp_config::GovProConfig;
use gp_core::entities::{MemberId, NewTask, ProjectId, Task, TaskId, TeamMember, WorkflowTemplate};
use gp_core::enums::TaskStatus;
use gp_core::responses::{BoardView, ProjectSummary, StepActivation, WorkflowOverview};

use crate::board::{BoardController, DropOutcome};
use crate::derive::step_views;
use crate::due::DueClock;
use crate::error::WorkflowError;
use crate::ids::IdSequence;
use crate::notify::{Notifier, TracingNotifier};
use crate::project::Project;
use crate::roles::RoleRegistry;
use crate::seed;
use crate::templates::TemplateRegistry;
use crate::updates::task::{TaskUpdate, TaskUpdateBuilder};

/// Profile fields a member may edit about themselves.
#[derive(Debug, Clone, Default)]
pub struct MemberProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub role_id: Option<String>,
}

pub struct Portfolio {
    projects: Vec<Project>,
    active_project_id: ProjectId,
    owner: TeamMember,
    templates: TemplateRegistry,
    roles: RoleRegistry,
    config: GovProConfig,
    notifier: Arc<dyn Notifier>,
    task_ids: IdSequence,
    member_ids: IdSequence,
    project_ids: IdSequence,
    now: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portfolio")
            .field("projects", &self.projects.len())
            .field("active_project_id", &self.active_project_id)
            .field("templates", &self.templates.len())
            .finish_non_exhaustive()
    }
}

impl Portfolio {
    /// An empty portfolio owned by `owner` with one starting project.
    pub fn new(
        config: GovProConfig,
        owner: TeamMember,
        templates: TemplateRegistry,
        roles: RoleRegistry,
    ) -> Result<Self, WorkflowError> {
        let template_id = templates.require(&config.general.default_template)?.id.clone();
        let task_ids = IdSequence::default();
        let project = Project::new(1, "Untitled Project", "", template_id, owner.clone(), task_ids.clone());
        Ok(Self::assemble(config, owner, templates, roles, task_ids, vec![project]))
    }

    /// The demo portfolio: built-in templates and roles, two projects.
    pub fn seeded(config: GovProConfig) -> Result<Self, WorkflowError> {
        let templates = TemplateRegistry::new(seed::templates())?;
        let roles = RoleRegistry::new(seed::roles());
        let task_ids = IdSequence::default();
        let projects = seed::projects(Utc::now(), &task_ids);
        Ok(Self::assemble(config, seed::owner(), templates, roles, task_ids, projects))
    }

    fn assemble(
        config: GovProConfig,
        owner: TeamMember,
        templates: TemplateRegistry,
        roles: RoleRegistry,
        task_ids: IdSequence,
        projects: Vec<Project>,
    ) -> Self {
        let member_ids = IdSequence::default();
        let project_ids = IdSequence::default();
        for project in &projects {
            project_ids.advance_past(project.id);
            for member in project.team() {
                member_ids.advance_past(member.id);
            }
        }
        let active_project_id = projects.first().map_or(1, |p| p.id);
        Self {
            projects,
            active_project_id,
            owner,
            templates,
            roles,
            config,
            notifier: Arc::new(TracingNotifier),
            task_ids,
            member_ids,
            project_ids,
            now: None,
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Pin the clock used for due-date urgency.
    #[must_use]
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &GovProConfig {
        &self.config
    }

    #[must_use]
    pub const fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn templates_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.templates
    }

    #[must_use]
    pub const fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    pub fn roles_mut(&mut self) -> &mut RoleRegistry {
        &mut self.roles
    }

    #[must_use]
    pub fn clock(&self) -> DueClock {
        DueClock::new(
            self.now.unwrap_or_else(Utc::now),
            self.config.general.due_soon_hours,
        )
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .map(|p| p.summary(p.id == self.active_project_id))
            .collect()
    }

    #[must_use]
    pub const fn active_project_id(&self) -> ProjectId {
        self.active_project_id
    }

    pub fn project(&self, project_id: ProjectId) -> Result<&Project, WorkflowError> {
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or(WorkflowError::UnknownProject(project_id))
    }

    pub fn active(&self) -> Result<&Project, WorkflowError> {
        self.project(self.active_project_id)
    }

    pub fn active_mut(&mut self) -> Result<&mut Project, WorkflowError> {
        let id = self.active_project_id;
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(WorkflowError::UnknownProject(id))
    }

    pub fn switch_project(&mut self, project_id: ProjectId) -> Result<&Project, WorkflowError> {
        self.project(project_id)?;
        if self.active_project_id != project_id {
            tracing::info!(from = self.active_project_id, to = project_id, "switched project");
            self.active_project_id = project_id;
        }
        self.active()
    }

    /// Create a project owned by the portfolio owner and make it active.
    pub fn create_project(
        &mut self,
        name: &str,
        description: &str,
        template_id: &str,
    ) -> Result<&Project, WorkflowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkflowError::Validation(String::from(
                "Project name is a required field",
            )));
        }
        self.templates.require(template_id)?;

        let id = self.project_ids.next_id();
        let project = Project::new(
            id,
            name,
            description.trim(),
            template_id,
            self.owner.clone(),
            self.task_ids.clone(),
        );
        tracing::info!(project_id = id, template_id, "project created");
        self.projects.push(project);
        self.active_project_id = id;
        self.active()
    }

    /// Template a project renders: its own, or the configured default if
    /// that one is gone.
    pub fn template_for(&self, project: &Project) -> Result<&WorkflowTemplate, WorkflowError> {
        self.templates
            .resolve(project.template_id(), &self.config.general.default_template)
            .ok_or_else(|| WorkflowError::UnknownTemplate(project.template_id().to_string()))
    }

    pub fn active_template(&self) -> Result<&WorkflowTemplate, WorkflowError> {
        self.template_for(self.active()?)
    }

    /// Switch the active project's template. Returns the orphaned task count.
    pub fn change_template(&mut self, template_id: &str) -> Result<usize, WorkflowError> {
        let template = self.templates.require(template_id)?.clone();
        Ok(self.active_mut()?.change_template(&template))
    }

    // -----------------------------------------------------------------------
    // Tasks on the active project
    // -----------------------------------------------------------------------

    /// Create a task; sends a calendar invite notice when it has a due date
    /// and planner sync is on.
    pub fn add_task(&mut self, new: NewTask) -> Result<Task, WorkflowError> {
        let template = self.active_template()?.clone();
        let planner_sync = self.config.planner_sync_enabled();
        let notifier = Arc::clone(&self.notifier);
        let project = self.active_mut()?;
        let task = project.add_task(&template, new)?;

        if task.due_date.is_some() && planner_sync {
            let assignee = project
                .member(task.assigned_to_id)
                .map_or("", |m| m.name.as_str());
            notifier.notify(&format!(
                "(Mock) Calendar invite sent to {assignee} for task: \"{}\".",
                task.name
            ));
        }
        Ok(task)
    }

    pub fn update_task(&mut self, task_id: TaskId, update: TaskUpdate) -> Result<Task, WorkflowError> {
        let template = self.active_template()?.clone();
        self.active_mut()?.update_task(&template, task_id, update)
    }

    /// Append a trimmed, non-empty comment to the task's update log.
    pub fn add_comment(&mut self, task_id: TaskId, comment: &str) -> Result<Task, WorkflowError> {
        self.update_task(task_id, TaskUpdateBuilder::new().comment(comment).build())
    }

    /// Hand the task to another member of the active team.
    pub fn reassign(&mut self, task_id: TaskId, member_id: MemberId) -> Result<Task, WorkflowError> {
        self.update_task(task_id, TaskUpdateBuilder::new().reassign(member_id).build())
    }

    /// Set or clear (`None`) the due instant and its display timezone.
    pub fn set_due_date(
        &mut self,
        task_id: TaskId,
        due: Option<DateTime<Utc>>,
        timezone: Option<String>,
    ) -> Result<Task, WorkflowError> {
        let timezone = due.and(timezone);
        let update = TaskUpdateBuilder::new()
            .due_date(due)
            .due_date_timezone(timezone)
            .build();
        self.update_task(task_id, update)
    }

    /// Move the task to another step of the active template.
    pub fn move_to_step(&mut self, task_id: TaskId, step_id: &str) -> Result<Task, WorkflowError> {
        self.update_task(task_id, TaskUpdateBuilder::new().step(step_id).build())
    }

    pub fn remove_task(&mut self, task_id: TaskId) -> Result<Option<Task>, WorkflowError> {
        Ok(self.active_mut()?.remove_task(task_id))
    }

    pub fn request_block(&mut self, task_id: TaskId) -> Result<(), WorkflowError> {
        self.active_mut()?.request_block(task_id)
    }

    pub fn submit_block_reason(&mut self, reason: &str) -> Result<Task, WorkflowError> {
        self.active_mut()?.submit_block_reason(reason)
    }

    pub fn cancel_block(&mut self) -> Result<Option<TaskId>, WorkflowError> {
        Ok(self.active_mut()?.cancel_block())
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn board(&self, controller: &BoardController) -> Result<BoardView, WorkflowError> {
        Ok(controller.render(self.active()?, &self.clock()))
    }

    pub fn drop_task(
        &mut self,
        controller: &BoardController,
        task_id: TaskId,
        lane: TaskStatus,
    ) -> Result<DropOutcome, WorkflowError> {
        controller.drop_task(self.active_mut()?, task_id, lane)
    }

    pub fn overview(&self) -> Result<WorkflowOverview, WorkflowError> {
        let project = self.active()?;
        let template = self.template_for(project)?;
        Ok(WorkflowOverview {
            project_id: project.id,
            template_id: template.id.clone(),
            template_name: template.name.clone(),
            steps: step_views(template, project.tasks().as_slice()),
            orphaned_tasks: project
                .orphaned_tasks(template)
                .iter()
                .map(|task| task.id)
                .collect(),
        })
    }

    pub fn activate_step(&self, step_id: &str) -> Result<StepActivation, WorkflowError> {
        let project = self.active()?;
        let template = self.template_for(project)?;
        project.activate_step(
            template,
            step_id,
            &self.clock(),
            &self.config.notifications.stakeholder_roles,
            self.notifier.as_ref(),
        )
    }

    // -----------------------------------------------------------------------
    // Team and roles
    // -----------------------------------------------------------------------

    /// Add a new person to the active project's team.
    pub fn assign_member(
        &mut self,
        name: &str,
        role_id: &str,
        title: &str,
    ) -> Result<TeamMember, WorkflowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkflowError::Validation(String::from(
                "Member name is a required field",
            )));
        }
        self.roles.require(role_id)?;
        let member = TeamMember {
            id: self.member_ids.next_id(),
            name: name.to_string(),
            role_id: role_id.to_string(),
            avatar: TeamMember::initials(name),
            email: TeamMember::mock_email(name),
            title: title.trim().to_string(),
            can_manage_roles: false,
        };
        self.active_mut()?.add_member(member.clone())?;
        Ok(member)
    }

    /// Remove a member from the active project along with their tasks.
    pub fn remove_member(&mut self, member_id: MemberId) -> Result<Vec<Task>, WorkflowError> {
        let (_, removed) = self.active_mut()?.remove_member(member_id)?;
        Ok(removed)
    }

    /// Edit a member's profile in every project they belong to.
    pub fn update_member(
        &mut self,
        member_id: MemberId,
        profile: MemberProfile,
    ) -> Result<TeamMember, WorkflowError> {
        let mut member = self
            .projects
            .iter()
            .find_map(|p| p.member(member_id))
            .cloned()
            .ok_or(WorkflowError::UnknownMember(member_id))?;

        if let Some(name) = profile.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(WorkflowError::Validation(String::from(
                    "Member name is a required field",
                )));
            }
            member.name = name.to_string();
            member.avatar = TeamMember::initials(name);
        }
        if let Some(role_id) = profile.role_id {
            self.roles.require(&role_id)?;
            member.role_id = role_id;
        }
        if let Some(email) = profile.email {
            member.email = email.trim().to_string();
        }
        if let Some(title) = profile.title {
            member.title = title.trim().to_string();
        }

        let updated = self
            .projects
            .iter_mut()
            .map(|p| p.replace_member(&member))
            .filter(|replaced| *replaced)
            .count();
        if self.owner.id == member.id {
            self.owner.clone_from(&member);
        }
        tracing::debug!(member_id, projects = updated, "member profile updated");
        Ok(member)
    }

    /// Delete a role no member of any project holds.
    pub fn delete_role(&mut self, role_id: &str) -> Result<(), WorkflowError> {
        let holders = self
            .projects
            .iter()
            .map(|p| p.count_role_holders(role_id))
            .sum();
        self.roles.remove(role_id, holders)?;
        Ok(())
    }

    /// Persona prompt for AI analysis under `role_id`.
    pub fn persona(&self, role_id: &str) -> Result<&str, WorkflowError> {
        Ok(self.roles.require(role_id)?.persona.as_str())
    }
}
