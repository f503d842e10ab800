use gp_core::enums::BoardScope;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BoardArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `gpa board`.
pub fn handle(args: &BoardArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.select_project(args.project.project)?;
    let scope = if args.mine {
        BoardScope::Mine
    } else {
        BoardScope::Team
    };
    let controller = ctx.board_controller(scope)?;
    let board = ctx.portfolio.board(&controller)?;

    let rows = board
        .lanes
        .iter()
        .flat_map(|lane| {
            lane.cards.iter().map(move |card| {
                vec![
                    lane.status.as_str().to_string(),
                    card.task_id.to_string(),
                    card.name.clone(),
                    card.assignee_avatar.clone().unwrap_or_else(|| String::from("?")),
                    card.due.as_ref().map_or_else(String::new, |due| due.display.clone()),
                    card.block_reason.clone().unwrap_or_default(),
                ]
            })
        })
        .collect::<Vec<_>>();
    output_rows(
        &board,
        &["lane", "task", "name", "who", "due", "reason"],
        &rows,
        flags.format,
    )
}
