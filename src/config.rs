use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "roster";
const CONFIG_FILE: &str = "config.json";

pub const ENV_CASCADE_REMOVALS: &str = "ROSTER_CASCADE_REMOVALS";
pub const ENV_UNGRADED_MARKER: &str = "ROSTER_UNGRADED_MARKER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Removing a student also drops them from course rosters and deletes
    /// their enrollments; removing a course deletes its enrollments.
    /// Off by default: removal only touches the membership list.
    pub cascade_removals: bool,
    /// Text rendered in place of a grade that has not been assigned.
    pub ungraded_marker: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cascade_removals: false,
            ungraded_marker: "None".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from the user's config directory.
    /// Returns default config if file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match get_config_path() {
            Ok(path) => Self::load_from(Some(path)),
            Err(e) => {
                tracing::warn!("Failed to locate config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Lenient load: a missing path, a missing file or an unparsable file
    /// all yield the defaults.
    pub fn load_from(path: Option<PathBuf>) -> Self {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit JSON file. Missing keys take defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Override fields from `ROSTER_*` environment variables.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(ENV_CASCADE_REMOVALS) {
            self.cascade_removals = parse_flag(&raw)
                .with_context(|| format!("Invalid value for {}", ENV_CASCADE_REMOVALS))?;
        }
        if let Some(marker) = lookup(ENV_UNGRADED_MARKER) {
            self.ungraded_marker = marker;
        }
        Ok(self)
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("expected a boolean, got `{}`", other)),
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
