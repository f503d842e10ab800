use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gpa` binary.
#[derive(Debug, Parser)]
#[command(name = "gpa", version, about = "GovPro - proposal workflow assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Act as this team member (defaults to the project owner)
    #[arg(long = "as", global = true, value_name = "MEMBER_ID")]
    pub acting_as: Option<u64>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            acting_as: self.acting_as,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["gpa", "--format", "table", "--verbose", "projects"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Projects));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["gpa", "templates", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Templates));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["gpa", "--format", "xml", "projects"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn acting_member_is_copied_into_flags() {
        let cli = Cli::try_parse_from(["gpa", "board", "--mine", "--as", "3"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.acting_as, Some(3));
        let Commands::Board(args) = cli.command else {
            panic!("expected board");
        };
        assert!(args.mine);
        assert_eq!(args.project.project, None);
    }

    #[test]
    fn activate_takes_step_and_project() {
        let cli = Cli::try_parse_from(["gpa", "activate", "red-team", "--project", "2"])
            .expect("cli should parse");
        let Commands::Activate(args) = cli.command else {
            panic!("expected activate");
        };
        assert_eq!(args.step, "red-team");
        assert_eq!(args.project.project, Some(2));
    }

    #[test]
    fn analyze_requires_at_least_one_file() {
        assert!(Cli::try_parse_from(["gpa", "analyze"]).is_err());

        let cli = Cli::try_parse_from([
            "gpa",
            "analyze",
            "rfi.txt",
            "qa.md",
            "--role",
            "writer",
            "--prompt",
            "Focus on risks",
        ])
        .expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.role.as_deref(), Some("writer"));
        assert_eq!(args.prompt.as_deref(), Some("Focus on risks"));
        assert!(args.templates.is_empty());
    }

    #[test]
    fn analyze_accepts_templates_and_fills() {
        let cli = Cli::try_parse_from([
            "gpa",
            "analyze",
            "rfp.md",
            "--template",
            "swot",
            "--template",
            "summary",
            "--fill",
            "Competitor A=Acme = Co",
        ])
        .expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.templates, ["swot", "summary"]);
        assert_eq!(
            args.fills,
            [("Competitor A".to_string(), "Acme = Co".to_string())]
        );
    }

    #[test]
    fn analyze_rejects_fill_without_key() {
        assert!(Cli::try_parse_from(["gpa", "analyze", "rfp.md", "--fill", "Acme"]).is_err());
        assert!(Cli::try_parse_from(["gpa", "analyze", "rfp.md", "--fill", "=Acme"]).is_err());
    }
}
