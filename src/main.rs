use anyhow::Result;
use appicon::cli::{Cli, Commands};
use appicon::commands;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Commands::Generate) {
        Commands::Generate => commands::generate::run(&cli).map(|_| ()),
        Commands::Check => commands::check::run(&cli).map(|_| ()),
        Commands::Init => commands::init::run(&cli),
    }
}
