use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfigArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gpa config`.
pub fn handle(args: &ConfigArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = ctx.portfolio.config();
    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }
    output(config, flags.format)
}
