use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

#[derive(Debug, Serialize)]
struct TemplateListing<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    is_custom: bool,
    steps: Vec<&'a str>,
}

/// Handle `gpa templates`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let listings = ctx
        .portfolio
        .templates()
        .iter()
        .map(|template| TemplateListing {
            id: &template.id,
            name: &template.name,
            description: &template.description,
            is_custom: template.is_custom,
            steps: template.steps.iter().map(|step| step.id.as_str()).collect(),
        })
        .collect::<Vec<_>>();

    let rows = listings
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.name.to_string(),
                t.is_custom.to_string(),
                t.steps.join(" > "),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(&listings, &["id", "name", "custom", "steps"], &rows, flags.format)
}
