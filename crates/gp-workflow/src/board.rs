//! Kanban board controller.
//!
//! Four fixed lanes in `todo, inprogress, blocked, done` order. A card can be
//! dragged only by its assignee; the team/mine scope filters what renders and
//! never what may move.

use gp_core::entities::{MemberId, Task, TaskId};
use gp_core::enums::{BoardScope, TaskStatus};
use gp_core::responses::{BoardCard, BoardLane, BoardView};

use crate::due::DueClock;
use crate::error::WorkflowError;
use crate::project::Project;

/// Result of dropping a card on a lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Moved {
        task_id: TaskId,
        from: TaskStatus,
        to: TaskStatus,
    },
    /// Dropped on its own lane.
    Unchanged,
    /// Dropped on `blocked`: a reason must be submitted before it moves.
    BlockRequested { task_id: TaskId },
}

#[derive(Debug, Clone, Copy)]
pub struct BoardController {
    current_user_id: MemberId,
    scope: BoardScope,
}

impl BoardController {
    #[must_use]
    pub const fn new(current_user_id: MemberId, scope: BoardScope) -> Self {
        Self {
            current_user_id,
            scope,
        }
    }

    #[must_use]
    pub const fn current_user_id(&self) -> MemberId {
        self.current_user_id
    }

    #[must_use]
    pub const fn scope(&self) -> BoardScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: BoardScope) {
        self.scope = scope;
    }

    #[must_use]
    pub const fn can_drag(&self, task: &Task) -> bool {
        task.assigned_to_id == self.current_user_id
    }

    fn shows(&self, task: &Task) -> bool {
        match self.scope {
            BoardScope::Team => true,
            BoardScope::Mine => task.assigned_to_id == self.current_user_id,
        }
    }

    #[must_use]
    pub fn render(&self, project: &Project, clock: &DueClock) -> BoardView {
        let lanes = TaskStatus::LANES
            .iter()
            .map(|&status| BoardLane {
                status,
                title: status.title().to_string(),
                cards: project
                    .tasks()
                    .by_status(status)
                    .filter(|task| self.shows(task))
                    .map(|task| BoardCard {
                        task_id: task.id,
                        name: task.name.clone(),
                        assignee_id: task.assigned_to_id,
                        assignee_avatar: project
                            .member(task.assigned_to_id)
                            .map(|member| member.avatar.clone()),
                        draggable: self.can_drag(task),
                        block_reason: task.block_reason.clone(),
                        due: clock.badge(task),
                    })
                    .collect(),
            })
            .collect();

        BoardView {
            project_id: project.id,
            scope: self.scope,
            current_user_id: self.current_user_id,
            lanes,
        }
    }

    /// Handle a drop of `task_id` onto `lane`.
    ///
    /// Moving to any lane but `blocked` applies immediately and clears the
    /// block reason. Moving to `blocked` opens a block request instead.
    pub fn drop_task(
        &self,
        project: &mut Project,
        task_id: TaskId,
        lane: TaskStatus,
    ) -> Result<DropOutcome, WorkflowError> {
        let Some(task) = project.task(task_id).cloned() else {
            tracing::warn!(task_id, "drop for unknown task ignored");
            return Err(WorkflowError::UnknownTask(task_id));
        };
        if !self.can_drag(&task) {
            tracing::warn!(
                task_id,
                assignee = task.assigned_to_id,
                user = self.current_user_id,
                "drop by non-assignee rejected"
            );
            return Err(WorkflowError::NotAssignee {
                task_id,
                assignee: task.assigned_to_id,
                user: self.current_user_id,
            });
        }
        if task.status == lane {
            return Ok(DropOutcome::Unchanged);
        }

        let (store, block) = project.board_parts_mut();
        if lane == TaskStatus::Blocked {
            block.request(store, task_id)?;
            return Ok(DropOutcome::BlockRequested { task_id });
        }

        let from = task.status;
        let mut moved = task;
        moved.status = lane;
        moved.block_reason = None;
        store.update(moved)?;
        block.forget(task_id);
        tracing::debug!(task_id, %from, to = %lane, "card moved");
        Ok(DropOutcome::Moved {
            task_id,
            from,
            to: lane,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdSequence;
    use crate::seed;
    use chrono::{TimeZone, Utc};
    use gp_core::entities::{NewTask, TeamMember};
    use pretty_assertions::assert_eq;

    fn member(id: MemberId, name: &str) -> TeamMember {
        TeamMember {
            id,
            name: name.into(),
            role_id: "writer".into(),
            avatar: TeamMember::initials(name),
            email: TeamMember::mock_email(name),
            title: String::new(),
            can_manage_roles: false,
        }
    }

    fn project() -> (Project, TaskId, TaskId) {
        let template = seed::templates().remove(0);
        let mut project = Project::new(
            1,
            "P",
            "",
            template.id.clone(),
            member(1, "Alex Johnson"),
            IdSequence::default(),
        );
        project.add_member(member(2, "Brenda Smith")).unwrap();
        let mine = project
            .add_task(&template, NewTask::new("Mine", 1, "intake"))
            .unwrap();
        let theirs = project
            .add_task(
                &template,
                NewTask::new("Theirs", 2, "drafting").status(TaskStatus::InProgress),
            )
            .unwrap();
        (project, mine.id, theirs.id)
    }

    fn clock() -> DueClock {
        DueClock::new(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(), 48)
    }

    #[test]
    fn renders_four_lanes_in_fixed_order() {
        let (project, _, _) = project();
        let view = BoardController::new(1, BoardScope::Team).render(&project, &clock());
        let lanes: Vec<_> = view.lanes.iter().map(|l| l.status).collect();
        assert_eq!(lanes, TaskStatus::LANES);
        assert_eq!(view.lane(TaskStatus::Todo).unwrap().cards.len(), 1);
        assert_eq!(view.lane(TaskStatus::InProgress).unwrap().cards.len(), 1);
    }

    #[test]
    fn mine_scope_filters_display_only() {
        let (mut project, _, theirs) = project();
        let controller = BoardController::new(1, BoardScope::Mine);
        let view = controller.render(&project, &clock());
        let names: Vec<_> = view
            .lanes
            .iter()
            .flat_map(|lane| lane.cards.iter().map(|c| c.name.as_str()))
            .collect();
        assert_eq!(names, ["Mine"]);

        assert!(controller
            .drop_task(&mut project, theirs, TaskStatus::Done)
            .is_err());
    }

    #[test]
    fn cards_of_others_are_not_draggable() {
        let (project, mine, theirs) = project();
        let view = BoardController::new(1, BoardScope::Team).render(&project, &clock());
        let card = |id| {
            view.lanes
                .iter()
                .flat_map(|lane| lane.cards.iter())
                .find(|card| card.task_id == id)
                .unwrap()
                .clone()
        };
        assert!(card(mine).draggable);
        assert!(!card(theirs).draggable);
        assert_eq!(card(theirs).assignee_avatar.as_deref(), Some("BS"));
    }

    #[test]
    fn drop_moves_own_task() {
        let (mut project, mine, _) = project();
        let outcome = BoardController::new(1, BoardScope::Team)
            .drop_task(&mut project, mine, TaskStatus::InProgress)
            .unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                task_id: mine,
                from: TaskStatus::Todo,
                to: TaskStatus::InProgress
            }
        );
        assert_eq!(project.task(mine).unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn drop_by_non_assignee_never_changes_status() {
        let (mut project, _, theirs) = project();
        let result = BoardController::new(1, BoardScope::Team).drop_task(
            &mut project,
            theirs,
            TaskStatus::Done,
        );
        assert!(matches!(result, Err(WorkflowError::NotAssignee { .. })));
        assert_eq!(project.task(theirs).unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn drop_on_same_lane_is_noop() {
        let (mut project, mine, _) = project();
        let outcome = BoardController::new(1, BoardScope::Team)
            .drop_task(&mut project, mine, TaskStatus::Todo)
            .unwrap();
        assert_eq!(outcome, DropOutcome::Unchanged);
    }

    #[test]
    fn drop_on_blocked_opens_request_then_unblock_clears_reason() {
        let (mut project, mine, _) = project();
        let controller = BoardController::new(1, BoardScope::Team);
        let outcome = controller
            .drop_task(&mut project, mine, TaskStatus::Blocked)
            .unwrap();
        assert_eq!(outcome, DropOutcome::BlockRequested { task_id: mine });
        assert_eq!(project.task(mine).unwrap().status, TaskStatus::Todo);

        project.submit_block_reason("waiting on pricing").unwrap();
        assert_eq!(project.task(mine).unwrap().status, TaskStatus::Blocked);

        controller
            .drop_task(&mut project, mine, TaskStatus::Done)
            .unwrap();
        let task = project.task(mine).unwrap();
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.block_reason, None);
    }

    #[test]
    fn drop_for_unknown_task_fails() {
        let (mut project, _, _) = project();
        assert!(matches!(
            BoardController::new(1, BoardScope::Team).drop_task(
                &mut project,
                999,
                TaskStatus::Done
            ),
            Err(WorkflowError::UnknownTask(999))
        ));
    }
}
