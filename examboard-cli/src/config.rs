//! Global examboard configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_SOURCE: &str = "data.json";
static DEFAULT_TIME_ENDPOINT: &str = "https://worldtimeapi.org/api/ip";

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_time_endpoint() -> String {
    DEFAULT_TIME_ENDPOINT.to_string()
}

/// Global configuration at ~/.config/examboard/config.toml
///
/// Both keys are optional; a missing file means defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// Data source used when a command gets no --source.
    #[serde(default = "default_source")]
    pub default_source: String,

    /// World-time endpoint polled by the network clock.
    #[serde(default = "default_time_endpoint")]
    pub time_endpoint: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            default_source: default_source(),
            time_endpoint: default_time_endpoint(),
        }
    }
}

impl GlobalConfig {
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(GlobalConfig::default());
        };
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config at {}", path.display()))
    }

    pub fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("examboard").join("config.toml"))
    }

    /// Resolve the source for a command: an explicit flag wins over config.
    pub fn resolve_source<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.unwrap_or(&self.default_source)
    }
}
