//! Configuration for the toolkit menu.
//!
//! Settings live in `~/.security_toolkit/config.yml`. The file is optional:
//! a missing file yields the defaults, and callers are expected to fall back
//! to the defaults on a parse failure as well (see [`Config::load_or_default`]).
//!
//! ```yaml
//! version: "2.7.4"
//! ```
//!
//! Keys other than `version` are accepted and ignored.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Version shown in the header when the config does not set one
pub const DEFAULT_VERSION: &str = "2.7.4";

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "SECURITY_TOOLKIT_CONFIG";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Display version; any YAML scalar is accepted (`2.8`, `"2.7.4"`)
    version: Option<serde_yaml::Value>,
}

impl Config {
    /// Config with an explicit display version
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(serde_yaml::Value::String(version.into())),
        }
    }

    /// Version string for the header subtitle
    pub fn version(&self) -> String {
        match &self.version {
            Some(serde_yaml::Value::String(s)) => s.clone(),
            Some(serde_yaml::Value::Number(n)) => n.to_string(),
            Some(serde_yaml::Value::Bool(b)) => b.to_string(),
            _ => DEFAULT_VERSION.to_string(),
        }
    }

    /// Load the config at `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty document is the same as no settings at all
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config, substituting the defaults on any failure.
    ///
    /// The error is handed back so the caller can show it to the user.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        let Some(path) = path else {
            tracing::debug!("no home directory, using default config");
            return (Self::default(), None);
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), version = %config.version(), "config loaded");
                (config, None)
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading config");
                (Self::default(), Some(err))
            }
        }
    }
}

/// Resolve the config file path: explicit override, then `SECURITY_TOOLKIT_CONFIG`,
/// then `~/.security_toolkit/config.yml`.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Ok(v) = env::var(CONFIG_PATH_ENV) {
        if !v.is_empty() {
            return Some(PathBuf::from(v));
        }
    }
    default_config_path()
}

/// `~/.security_toolkit/config.yml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".security_toolkit").join("config.yml"))
}
