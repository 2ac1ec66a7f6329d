use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::{config_dir, Config};
use crate::iconset::MACOS_ICON_SET;
use crate::lockfile::{hash_file, Lockfile, LOCKFILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    NoLockfile,
    LogoChanged,
    LogoUnreadable,
    Missing { filename: String },
    WrongSize {
        filename: String,
        width: u32,
        height: u32,
    },
    Unreadable { filename: String },
    Modified { filename: String },
    NotRecorded { filename: String },
    Placeholder { filename: String },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::NoLockfile => write!(f, "No lockfile found. Run `appicon generate` first."),
            Finding::LogoChanged => write!(f, "Logo changed since the icons were generated"),
            Finding::LogoUnreadable => write!(f, "Logo exists but cannot be read"),
            Finding::Missing { filename } => write!(f, "{filename} is missing"),
            Finding::WrongSize {
                filename,
                width,
                height,
            } => write!(f, "{filename} is {width}x{height}"),
            Finding::Unreadable { filename } => write!(f, "{filename} cannot be read"),
            Finding::Modified { filename } => {
                write!(f, "{filename} was modified after generation")
            }
            Finding::NotRecorded { filename } => {
                write!(f, "{filename} is not recorded in the lockfile")
            }
            Finding::Placeholder { filename } => {
                write!(f, "{filename} holds the placeholder instead of the logo")
            }
        }
    }
}

pub fn run(cli: &Cli) -> Result<Vec<Finding>> {
    let config = Config::load(&cli.config)?;
    let config_dir = config_dir(&cli.config);
    let logo_path = config.logo_path(config_dir);

    if !logo_path.is_file() {
        bail!("Logo not found at {}", logo_path.display());
    }
    println!("{} Logo found ({})", "✓".green(), logo_path.display());

    let findings = collect_findings(&config, config_dir)?;

    if findings.is_empty() {
        println!("{} All icons are up to date.", "✓".green());
    }
    for finding in &findings {
        let glyph = match finding {
            Finding::NoLockfile | Finding::LogoUnreadable | Finding::Placeholder { .. } => {
                "!".yellow()
            }
            _ => "✗".red(),
        };
        println!("{} {}", glyph, finding);
    }

    Ok(findings)
}

fn collect_findings(config: &Config, config_dir: &Path) -> Result<Vec<Finding>> {
    let lockfile_path = config_dir.join(LOCKFILE_NAME);
    if !lockfile_path.exists() {
        return Ok(vec![Finding::NoLockfile]);
    }

    let lockfile = Lockfile::load(&lockfile_path)?;
    let dest_dir = config.dest_dir(config_dir);
    let mut findings = Vec::new();

    match hash_file(&config.logo_path(config_dir)) {
        Ok(hash) if lockfile.logo_hash.as_deref() == Some(hash.as_str()) => {}
        Ok(_) => findings.push(Finding::LogoChanged),
        Err(_) => findings.push(Finding::LogoUnreadable),
    }

    for spec in MACOS_ICON_SET {
        let filename = spec.filename.to_string();
        let path = dest_dir.join(spec.filename);

        if !path.is_file() {
            findings.push(Finding::Missing { filename });
            continue;
        }

        match image::image_dimensions(&path) {
            Ok((width, height)) if width == spec.size && height == spec.size => {}
            Ok((width, height)) => {
                findings.push(Finding::WrongSize {
                    filename,
                    width,
                    height,
                });
                continue;
            }
            Err(_) => {
                findings.push(Finding::Unreadable { filename });
                continue;
            }
        }

        let Some(lock) = lockfile.icons.get(spec.filename) else {
            findings.push(Finding::NotRecorded { filename });
            continue;
        };

        match hash_file(&path) {
            Ok(hash) if hash != lock.hash => findings.push(Finding::Modified { filename }),
            Ok(_) if lock.placeholder => findings.push(Finding::Placeholder { filename }),
            Ok(_) => {}
            Err(_) => findings.push(Finding::Unreadable { filename }),
        }
    }

    Ok(findings)
}
