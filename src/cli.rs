use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "appicon",
    about = "Generate rounded macOS app icons from a single logo"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (optional; defaults apply when it does not exist)
    #[arg(long, global = true, default_value = crate::config::CONFIG_NAME)]
    pub config: PathBuf,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Render every icon of the macOS icon set (default)
    Generate,

    /// Report whether the generated icons are up to date with the logo
    Check,

    /// Write a starter appicon.toml
    Init,
}
