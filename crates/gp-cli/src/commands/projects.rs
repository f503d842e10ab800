use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `gpa projects`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summaries = ctx.portfolio.summaries();
    let rows = summaries
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                if p.active { String::from("*") } else { String::new() },
                p.name.clone(),
                p.template_id.clone(),
                p.team_size.to_string(),
                p.task_count.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(
        &summaries,
        &["id", "active", "name", "template", "team", "tasks"],
        &rows,
        flags.format,
    )
}
