use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List projects in the portfolio.
    Projects,
    /// List workflow templates.
    Templates,
    /// Show the derived status of every workflow step.
    Steps(ProjectArgs),
    /// Render the Kanban board.
    Board(BoardArgs),
    /// Open a workflow step (blocked listing or active-work summary).
    Activate(ActivateArgs),
    /// List tasks whose step is missing from the project's template.
    Orphans(ProjectArgs),
    /// Analyze RFI/RFP documents from a team role's point of view.
    Analyze(AnalyzeArgs),
    /// Generate Mermaid diagram code from a description.
    Diagram(DiagramArgs),
    /// Print the effective configuration.
    Config(ConfigArgs),
}

/// Project selector shared by project-scoped commands.
#[derive(Clone, Debug, Args)]
pub struct ProjectArgs {
    /// Project id (defaults to the active project)
    #[arg(long)]
    pub project: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct BoardArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Show only tasks assigned to the current user
    #[arg(long)]
    pub mine: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ActivateArgs {
    /// Step id within the project's template
    pub step: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Text or markdown files to analyze
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Role id whose persona drives the analysis
    #[arg(long)]
    pub role: Option<String>,

    /// Extra instructions for the analysis
    #[arg(long)]
    pub prompt: Option<String>,

    /// Prompt template to combine (repeatable, at most 3):
    /// swot, compliance, summary, `tech_stack`
    #[arg(long = "template", value_name = "ID")]
    pub templates: Vec<String>,

    /// Value for a template placeholder, e.g. `--fill "Competitor A=Acme"`
    #[arg(long = "fill", value_name = "KEY=VALUE", value_parser = parse_fill)]
    pub fills: Vec<(String, String)>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Split `KEY=VALUE` on the first `=`.
fn parse_fill(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("placeholder name is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[derive(Clone, Debug, Args)]
pub struct DiagramArgs {
    /// What the diagram should show
    pub prompt: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ConfigArgs {
    /// Print as TOML instead of the selected output format
    #[arg(long)]
    pub toml: bool,
}
