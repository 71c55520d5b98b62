//! User configuration for ews-tz.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EwsError, EwsResult};
use crate::timezone::{parse_zone, system_zone};

static DEFAULT_LOG_FILTER: &str = "warn";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn is_default_log_filter(filter: &String) -> bool {
    filter == DEFAULT_LOG_FILTER
}

/// Configuration at ~/.config/ews-tz/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EwsConfig {
    /// IANA zone used instead of the system zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter", skip_serializing_if = "is_default_log_filter")]
    pub log_filter: String,
}

impl Default for EwsConfig {
    fn default() -> Self {
        EwsConfig {
            time_zone: None,
            log_filter: default_log_filter(),
        }
    }
}

impl EwsConfig {
    pub fn config_path() -> EwsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EwsError::Config("Could not determine config directory".into()))?
            .join("ews-tz");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/ews-tz/config.toml, falling back to defaults when it doesn't exist.
    pub fn load() -> EwsResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> EwsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| EwsError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> EwsResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EwsError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| EwsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The configured zone, or the system zone when none is set.
    pub fn zone(&self) -> EwsResult<Tz> {
        match &self.time_zone {
            Some(id) => parse_zone(id),
            None => system_zone(),
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EwsResult<()> {
        let contents = format!(
            "\
# ews-tz configuration

# Time zone to resolve when none is given (defaults to the system zone):
# time_zone = \"America/Los_Angeles\"

# Log filter (RUST_LOG takes precedence):
# log_filter = \"{}\"
",
            DEFAULT_LOG_FILTER
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EwsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EwsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
