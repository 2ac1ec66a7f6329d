use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const LOCKFILE_NAME: &str = "appicon.lock.toml";
pub const LOCKFILE_VERSION: u32 = 1;

/// Record of the last `generate` run, keyed by output filename.
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Lockfile {
    pub version: u32,

    /// Absent when the logo could not be read during `generate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_hash: Option<String>,

    #[serde(default)]
    pub icons: BTreeMap<String, IconLock>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IconLock {
    pub size: u32,
    pub hash: String,
    #[serde(default)]
    pub placeholder: bool,
}

impl Lockfile {
    pub fn new(logo_hash: Option<String>) -> Self {
        Self {
            version: LOCKFILE_VERSION,
            logo_hash,
            icons: BTreeMap::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let lockfile: Lockfile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(lockfile)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// BLAKE3 hex digest of a file's contents.
pub fn hash_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}
