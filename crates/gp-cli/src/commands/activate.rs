use gp_core::responses::StepActivation;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActivateArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `gpa activate`.
pub fn handle(args: &ActivateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.select_project(args.project.project)?;
    let activation = ctx.portfolio.activate_step(&args.step)?;

    let unassigned = || String::from("(unassigned)");
    let rows = match &activation {
        StepActivation::Blocked { tasks, .. } => tasks
            .iter()
            .map(|task| {
                vec![
                    task.task_id.to_string(),
                    task.name.clone(),
                    task.assignee_name.clone().unwrap_or_else(unassigned),
                    task.reason.clone(),
                ]
            })
            .collect::<Vec<_>>(),
        StepActivation::Summary { active_tasks, .. } => active_tasks
            .iter()
            .map(|task| {
                vec![
                    task.task_id.to_string(),
                    task.name.clone(),
                    task.assignee_name.clone().unwrap_or_else(unassigned),
                    task.due.as_ref().map_or_else(
                        || task.status.as_str().to_string(),
                        |due| format!("{} ({})", task.status, due.display),
                    ),
                ]
            })
            .collect::<Vec<_>>(),
    };
    let detail = match &activation {
        StepActivation::Blocked { .. } => "reason",
        StepActivation::Summary { .. } => "status",
    };
    output_rows(&activation, &["task", "name", "assignee", detail], &rows, flags.format)
}
