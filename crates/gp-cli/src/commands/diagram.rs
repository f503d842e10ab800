use serde::Serialize;

use crate::cli::root_commands::DiagramArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DiagramResponse<'a> {
    project_id: u64,
    provider: &'a str,
    prompt: &'a str,
    code: &'a str,
}

/// Handle `gpa diagram`. `--format raw` prints bare Mermaid code.
pub async fn handle(
    args: &DiagramArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.select_project(args.project.project)?;
    let code = ctx.ai.generate_diagram(&args.prompt).await?;
    let provider = ctx.ai.provider();

    let project = ctx.portfolio.active_mut()?;
    project.workspace.diagram_prompt.clone_from(&args.prompt);
    project.workspace.diagram_code = Some(code.clone());

    if flags.format == OutputFormat::Raw {
        println!("{code}");
        return Ok(());
    }
    output(
        &DiagramResponse {
            project_id: project.id,
            provider: provider.as_str(),
            prompt: &args.prompt,
            code: &code,
        },
        flags.format,
    )
}
