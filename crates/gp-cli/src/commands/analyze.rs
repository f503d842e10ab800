use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use gp_ai::{AnalysisRequest, AnalysisSlot, Document, prompts};
use gp_core::entities::AnalysisResult;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gpa analyze`.
///
/// The persona comes from `--role`, or from the current user's role.
/// `--template` selections are fused into the custom prompt.
pub async fn handle(
    args: &AnalyzeArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.select_project(args.project.project)?;
    let role_id = match &args.role {
        Some(role_id) => role_id.clone(),
        None => {
            let member_id = ctx.current_user()?;
            ctx.portfolio.active()?.require_member(member_id)?.role_id.clone()
        }
    };
    let persona = ctx.portfolio.persona(&role_id)?.to_string();

    let mut documents = Vec::with_capacity(args.files.len());
    for path in &args.files {
        documents.push(read_document(path).await?);
    }
    let names = documents.iter().map(|doc| doc.name.clone()).collect::<Vec<_>>();

    let mut request = AnalysisRequest::new(documents, persona);
    if let Some(prompt) = custom_prompt(args)? {
        request = request.with_prompt(prompt);
    }

    let mut slot: AnalysisSlot<AnalysisResult> = AnalysisSlot::new();
    let ticket = slot.begin();
    tracing::debug!(role = %role_id, files = names.len(), "starting analysis");
    let outcome = ctx.ai.analyze(&request).await;
    slot.complete(ticket, outcome);

    if let Some(error) = slot.error() {
        anyhow::bail!("analysis failed: {error}");
    }
    let result = slot.result().cloned().context("analysis produced no result")?;

    let workspace = &mut ctx.portfolio.active_mut()?.workspace;
    workspace.documents = names;
    workspace.analysis = Some(result.clone());

    output(&result, flags.format)
}

/// Fused template prompt, followed by `--prompt` when both are given.
fn custom_prompt(args: &AnalyzeArgs) -> anyhow::Result<Option<String>> {
    if args.templates.is_empty() {
        return Ok(args.prompt.clone());
    }
    let fills = args.fills.iter().cloned().collect::<BTreeMap<_, _>>();
    let mut prompt = prompts::compose(args.templates.as_slice(), &fills)?;
    if let Some(extra) = args.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        prompt.push_str("\n\n");
        prompt.push_str(extra);
    }
    Ok(Some(prompt))
}

/// Read one upload. Non-UTF-8 files become empty binary documents, which the
/// request then skips.
async fn read_document(path: &Path) -> anyhow::Result<Document> {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(Document::from_file_name(name, text)),
        Err(_) => Ok(Document::new(name, "application/octet-stream", String::new())),
    }
}
