//! Drag-and-drop rules across every lane pair.

use chrono::{TimeZone, Utc};
use gp_config::GovProConfig;
use gp_core::entities::NewTask;
use gp_core::enums::{BoardScope, TaskStatus};
use gp_workflow::{BoardController, DropOutcome, Portfolio};
use pretty_assertions::assert_eq;
use rstest::rstest;

use TaskStatus::{Blocked, Done, InProgress, Todo};

/// Seeded Phoenix project with one task owned by member 1 in `status`.
fn portfolio_with(status: TaskStatus) -> (Portfolio, u64) {
    let mut portfolio = Portfolio::seeded(GovProConfig::default())
        .unwrap()
        .with_clock(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
    let new = NewTask::new("Card", 1, "drafting");
    let task = portfolio.add_task(new).unwrap();
    match status {
        Blocked => {
            portfolio.request_block(task.id).unwrap();
            portfolio.submit_block_reason("waiting").unwrap();
        }
        Todo => {}
        other => {
            portfolio
                .active_mut()
                .unwrap()
                .set_status(task.id, other)
                .unwrap();
        }
    }
    (portfolio, task.id)
}

#[rstest]
#[case(Todo, InProgress)]
#[case(Todo, Done)]
#[case(InProgress, Todo)]
#[case(InProgress, Done)]
#[case(Done, Todo)]
#[case(Blocked, Todo)]
#[case(Blocked, InProgress)]
#[case(Blocked, Done)]
fn owner_moves_between_open_lanes(#[case] from: TaskStatus, #[case] to: TaskStatus) {
    let (mut portfolio, id) = portfolio_with(from);
    let controller = BoardController::new(1, BoardScope::Team);
    let outcome = portfolio.drop_task(&controller, id, to).unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Moved {
            task_id: id,
            from,
            to
        }
    );
    let task = portfolio.active().unwrap().task(id).unwrap().clone();
    assert_eq!(task.status, to);
    assert_eq!(task.block_reason, None);
}

#[rstest]
#[case(Todo)]
#[case(InProgress)]
#[case(Done)]
fn dropping_on_blocked_only_requests(#[case] from: TaskStatus) {
    let (mut portfolio, id) = portfolio_with(from);
    let controller = BoardController::new(1, BoardScope::Team);
    let outcome = portfolio.drop_task(&controller, id, Blocked).unwrap();
    assert_eq!(outcome, DropOutcome::BlockRequested { task_id: id });
    assert_eq!(portfolio.active().unwrap().task(id).unwrap().status, from);
}

#[rstest]
#[case(Todo)]
#[case(InProgress)]
#[case(Blocked)]
#[case(Done)]
fn same_lane_is_unchanged(#[case] lane: TaskStatus) {
    let (mut portfolio, id) = portfolio_with(lane);
    let controller = BoardController::new(1, BoardScope::Team);
    assert_eq!(
        portfolio.drop_task(&controller, id, lane).unwrap(),
        DropOutcome::Unchanged
    );
}

#[rstest]
#[case(BoardScope::Team, Done)]
#[case(BoardScope::Mine, Done)]
#[case(BoardScope::Team, Blocked)]
#[case(BoardScope::Mine, Todo)]
fn other_users_never_move_the_card(#[case] scope: BoardScope, #[case] lane: TaskStatus) {
    let (mut portfolio, id) = portfolio_with(InProgress);
    let brenda = BoardController::new(2, scope);
    assert!(portfolio.drop_task(&brenda, id, lane).is_err());

    let project = portfolio.active().unwrap();
    assert_eq!(project.task(id).unwrap().status, InProgress);
    assert_eq!(project.block_flow().pending(), None);
}
