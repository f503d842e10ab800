use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Projects => commands::projects::handle(ctx, flags),
        Commands::Templates => commands::templates::handle(ctx, flags),
        Commands::Steps(args) => commands::steps::handle(&args, ctx, flags),
        Commands::Board(args) => commands::board::handle(&args, ctx, flags),
        Commands::Activate(args) => commands::activate::handle(&args, ctx, flags),
        Commands::Orphans(args) => commands::orphans::handle(&args, ctx, flags),
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
        Commands::Diagram(args) => commands::diagram::handle(&args, ctx, flags).await,
        Commands::Config(args) => commands::config::handle(&args, ctx, flags),
    }
}
