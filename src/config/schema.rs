//! Configuration schema for coge
//!
//! Configuration is stored at `~/.config/coge/config.toml`, with an
//! optional project-local `.coge.toml` layered on top.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Dependency install defaults
    pub install: InstallConfig,

    /// GitHub lookup settings
    pub github: GithubConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Defaults for `coge install`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Log install commands instead of running them
    pub skip_install: bool,

    /// Treat installer failures as fatal
    pub force_install: bool,

    /// Run `npm install` (default: true)
    pub npm: bool,

    /// Run `yarn install`
    pub yarn: bool,

    /// Run `bower install`
    pub bower: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            skip_install: false,
            force_install: false,
            npm: true,
            yarn: false,
            bower: false,
        }
    }
}

/// GitHub API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// API base URL (for GitHub Enterprise)
    pub api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: crate::user::github::DEFAULT_API_URL.to_string(),
        }
    }
}
