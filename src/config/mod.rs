mod error;

pub use error::ConfigError;

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::types::{DEFAULT_FETCH_TIMEOUT, FetchSettings};

/// Contents of `config.toml`. Unknown tables are ignored so the file can be
/// shared with other prompt tooling.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub git: GitSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSection {
    pub fetch_auto: bool,
    pub fetch_timeout: Duration,
}

impl Default for GitSection {
    fn default() -> Self {
        Self {
            fetch_auto: true,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl Config {
    #[must_use]
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            enabled: self.git.fetch_auto,
            timeout: self.git.fetch_timeout,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    git: RawGitSection,
}

#[derive(Debug, Default, Deserialize)]
struct RawGitSection {
    fetch_auto: Option<bool>,
    fetch_timeout: Option<i64>,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let defaults = GitSection::default();
        let fetch_timeout = match raw.git.fetch_timeout {
            None => defaults.fetch_timeout,
            Some(secs) => u64::try_from(secs)
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    message: format!("git.fetch_timeout must not be negative, found {secs}"),
                })?,
        };
        Ok(Self {
            git: GitSection {
                fetch_auto: raw.git.fetch_auto.unwrap_or(defaults.fetch_auto),
                fetch_timeout,
            },
        })
    }
}

/// Parse config text; `path` is only used in error messages.
///
/// # Errors
/// Returns an error when the text is not valid TOML or a value is out of range.
pub fn parse_config(path: &Path, text: &str) -> Result<Config, ConfigError> {
    let raw: RawConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Config::try_from(raw)
}

/// Read and parse the config file at `path`.
///
/// # Errors
/// Returns an error when the file cannot be read or parsed, or is invalid.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &text)
}

/// `$XDG_CONFIG_HOME/gitseg/config.toml`, else `$HOME/.config/gitseg/config.toml`.
#[must_use]
pub fn config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = xdg_config_home
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.filter(|s| !s.is_empty()).map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("gitseg").join("config.toml"))
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
}
