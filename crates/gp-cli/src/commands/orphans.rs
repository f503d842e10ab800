use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProjectArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `gpa orphans`.
pub fn handle(args: &ProjectArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.select_project(args.project)?;
    let project = ctx.portfolio.active()?;
    let template = ctx.portfolio.template_for(project)?;
    let orphans = project.orphaned_tasks(template);

    let rows = orphans
        .iter()
        .map(|task| {
            vec![
                task.id.to_string(),
                task.name.clone(),
                task.workflow_step.clone(),
                task.status.as_str().to_string(),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(&orphans, &["task", "name", "step", "status"], &rows, flags.format)
}
