use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::{config_dir, Config};
use crate::icon::{self, IconContent, IconOptions};
use crate::iconset::MACOS_ICON_SET;
use crate::lockfile::{hash_file, IconLock, Lockfile, LOCKFILE_NAME};

pub fn run(cli: &Cli) -> Result<Lockfile> {
    let config = Config::load(&cli.config)?;
    let config_dir = config_dir(&cli.config);
    let logo_path = config.logo_path(config_dir);
    let dest_dir = config.dest_dir(config_dir);

    if !logo_path.is_file() {
        bail!("Logo not found at {}", logo_path.display());
    }

    std::fs::create_dir_all(&dest_dir)
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    println!("Generating macOS icons with rounded corners...");
    println!("  Logo: {}", logo_path.display());
    println!("  Destination: {}\n", dest_dir.display());

    let options = IconOptions {
        bleed: config.bleed,
        ..IconOptions::default()
    };

    // An unreadable logo still yields placeholder icons below.
    let mut lockfile = Lockfile::new(hash_file(&logo_path).ok());
    let mut placeholders = 0;

    for spec in MACOS_ICON_SET {
        let output = dest_dir.join(spec.filename);
        let outcome = icon::generate(spec.size, &logo_path, &output, &options)?;

        match &outcome.content {
            IconContent::Logo => println!(
                "{} {} ({}x{})",
                "✓".green(),
                spec.filename,
                spec.size,
                spec.size
            ),
            IconContent::Placeholder { reason } => {
                placeholders += 1;
                println!(
                    "{} {} ({}x{}) used placeholder: {}",
                    "!".yellow(),
                    spec.filename,
                    spec.size,
                    spec.size,
                    reason
                );
            }
        }

        lockfile.icons.insert(
            spec.filename.to_string(),
            IconLock {
                size: spec.size,
                hash: outcome.hash.clone(),
                placeholder: outcome.is_placeholder(),
            },
        );
    }

    let lockfile_path = config_dir.join(LOCKFILE_NAME);
    lockfile.save(&lockfile_path)?;

    println!();
    if placeholders == 0 {
        println!(
            "{} Generated {} icons.",
            "✓".green(),
            MACOS_ICON_SET.len()
        );
    } else {
        println!(
            "{} Generated {} icons, {} with the placeholder. Check that the logo is a valid image.",
            "!".yellow(),
            MACOS_ICON_SET.len(),
            placeholders
        );
    }
    println!("Rebuild the app to see the new icon in the Dock.");

    Ok(lockfile)
}
