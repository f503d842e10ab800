use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProjectArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `gpa steps`.
pub fn handle(args: &ProjectArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.select_project(args.project)?;
    let overview = ctx.portfolio.overview()?;

    if !overview.orphaned_tasks.is_empty() {
        tracing::warn!(
            project_id = overview.project_id,
            orphans = overview.orphaned_tasks.len(),
            "tasks reference steps outside the template; see `gpa orphans`"
        );
    }

    let rows = overview
        .steps
        .iter()
        .map(|step| {
            let title = if step.is_terminal {
                format!("{} (final)", step.title)
            } else {
                step.title.clone()
            };
            vec![
                step.step_id.clone(),
                title,
                step.status.as_str().to_string(),
                step.task_count.to_string(),
                if step.connector_filled { "filled" } else { "" }.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(&overview, &["step", "title", "status", "tasks", "connector"], &rows, flags.format)
}
