//! Command-line interface module.

mod args;
pub mod check;
pub mod show;

pub use args::{Cli, Commands};

use anyhow::{Result, anyhow};
use std::path::PathBuf;
use tola_nav::config::find_config_file;

/// Locate the config file named on the command line.
pub fn locate_config(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    find_config_file(&cli.config, &cwd)
        .ok_or_else(|| anyhow!("config file '{}' not found", cli.config.display()))
}
