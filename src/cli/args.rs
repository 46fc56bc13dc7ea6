//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use tola_nav::Format;

/// Tola-nav navigation config CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "nav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Print the menu served for a request path
    #[command(visible_alias = "r")]
    Resolve {
        /// Request path (e.g. /zh/manual) or full URL
        #[arg(default_value = "/")]
        path: String,
    },

    /// Print the validated plugin descriptors
    #[command(visible_alias = "p")]
    Plugins,

    /// Print the resolved config in its on-disk schema
    Dump {
        /// Output syntax
        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["tola-nav", "-C", "site.json", "resolve", "/zh/manual"]);
        assert_eq!(cli.config, PathBuf::from("site.json"));
        assert!(matches!(cli.command, Commands::Resolve { ref path } if path == "/zh/manual"));
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["tola-nav", "dump"]);
        assert_eq!(cli.config, PathBuf::from("nav.toml"));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Dump { format: Format::Toml }));

        let cli = Cli::parse_from(["tola-nav", "r", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Resolve { ref path } if path == "/"));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
