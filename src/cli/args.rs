//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sitecfg documentation-site config resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Merge config revisions and print the resolved site descriptor
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Validate config revisions and report every problem at once
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Shared input arguments for Resolve and Check commands
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Config revisions, oldest first. Later files override earlier ones.
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Config file searched upward from cwd when no FILE is given
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Require sidebar links to be unique across all groups
    #[arg(long)]
    pub site_wide_links: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the descriptor to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Content directory; nav and sidebar links without a page are reported
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub routes: Option<PathBuf>,

    /// Treat missing content pages as errors instead of warnings
    #[arg(long)]
    pub strict_routes: bool,
}

/// Descriptor output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "sitecfg", "resolve", "old.json", "site.toml", "-f", "toml", "--site-wide-links",
        ]);
        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(
            args.input.files,
            vec![PathBuf::from("old.json"), PathBuf::from("site.toml")]
        );
        assert_eq!(args.format, OutputFormat::Toml);
        assert!(args.input.site_wide_links);
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::parse_from(["sitecfg", "check", "-r", "docs"]);
        let Commands::Check { args } = cli.command else {
            panic!("expected check");
        };
        assert!(args.input.files.is_empty());
        assert_eq!(args.input.config, PathBuf::from("site.toml"));
        assert_eq!(args.routes, Some(PathBuf::from("docs")));
        assert!(!args.strict_routes);
    }
}
