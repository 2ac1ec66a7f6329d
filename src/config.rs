use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_NAME: &str = "appicon.toml";

/// Project settings. Every field has a default, so a missing config file is
/// equivalent to an empty one. Padding and corner radius are fixed in code.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Source logo, relative to the config file's directory
    #[serde(default = "default_logo")]
    pub logo: PathBuf,

    /// Asset catalog directory that receives the PNGs
    #[serde(default = "default_dest")]
    pub dest: PathBuf,

    /// Bleed edge colors into the clipped corners (default: false)
    #[serde(default)]
    pub bleed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logo: default_logo(),
            dest: default_dest(),
            bleed: false,
        }
    }
}

fn default_logo() -> PathBuf {
    PathBuf::from("logo.png")
}

fn default_dest() -> PathBuf {
    PathBuf::from("macos/Runner/Assets.xcassets/AppIcon.appiconset")
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Absolute-or-relative logo path, resolved against `config_dir`.
    pub fn logo_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.logo)
    }

    pub fn dest_dir(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.dest)
    }

    pub fn default_template() -> String {
        r#"# appicon configuration
# Paths are relative to this file.

logo = "logo.png"
dest = "macos/Runner/Assets.xcassets/AppIcon.appiconset"

# Fill the transparent corners with neighboring colors (alpha stays 0).
# Avoids dark fringes when macOS scales the icon down.
# bleed = false
"#
        .to_string()
    }
}

/// Directory the config file lives in; paths in the config are relative to it.
pub fn config_dir(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
