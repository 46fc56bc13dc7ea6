//! Tola-nav - check and inspect navigation configs for documentation sites.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use tola_nav::{ConfigDocument, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let path = cli::locate_config(&cli)?;

    match &cli.command {
        Commands::Check => cli::check::check_config(&path),
        Commands::Resolve { path: request } => {
            let doc = ConfigDocument::from_path(&path)?;
            cli::show::show_menu(&doc, request)
        }
        Commands::Plugins => cli::show::show_plugins(&ConfigDocument::from_path(&path)?),
        Commands::Dump { format } => cli::show::dump(&ConfigDocument::from_path(&path)?, *format),
    }
}
