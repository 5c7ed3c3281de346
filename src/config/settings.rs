//! Configuration of icon and session search directories

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, SessionsError};
use crate::icon::default_search_directories;
use crate::sessions::{SessionDirectory, SessionType};
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directories searched for session badges, highest priority first
    pub icon_search_dirs: Vec<PathBuf>,
    /// Directories scanned for session `.desktop` files, in priority order
    pub session_dirs: Vec<SessionDirectory>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_search_dirs: default_search_directories(),
            session_dirs: SessionDirectory::defaults(),
        }
    }
}

/// TOML representation of icon configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlIconsConfig {
    pub search_dirs: Option<Vec<PathBuf>>,
}

/// TOML representation of session directory configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlSessionsConfig {
    /// X11 session directories
    pub x_dirs: Option<Vec<PathBuf>>,
    /// Wayland session directories
    pub wayland_dirs: Option<Vec<PathBuf>>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub icons: Option<TomlIconsConfig>,
    pub sessions: Option<TomlSessionsConfig>,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        let config_file = config_path();
        if !config_file.exists() {
            debug!(path = %config_file.display(), "No config file, using defaults");
            return Config::default();
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_file.display(), error = %e, "Ignoring unusable config");
                Config::default()
            }
        }
    }

    /// Load configuration from `path`, merging with defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let toml_config =
            toml::from_str::<TomlConfig>(&contents).map_err(|source| SessionsError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::default().merge(toml_config))
    }

    /// Parse configuration text, merging with defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        Ok(Self::default().merge(toml_config))
    }

    fn merge(mut self, toml_config: TomlConfig) -> Self {
        if let Some(search_dirs) = toml_config.icons.and_then(|icons| icons.search_dirs) {
            self.icon_search_dirs = search_dirs;
        }

        // A configured list replaces the defaults for that session type only
        if let Some(sessions) = toml_config.sessions {
            let (default_x, default_wayland): (Vec<_>, Vec<_>) = self
                .session_dirs
                .into_iter()
                .partition(|dir| dir.session_type == SessionType::X);

            let x_dirs = match sessions.x_dirs {
                Some(paths) => with_type(paths, SessionType::X),
                None => default_x,
            };
            let wayland_dirs = match sessions.wayland_dirs {
                Some(paths) => with_type(paths, SessionType::Wayland),
                None => default_wayland,
            };

            self.session_dirs = x_dirs.into_iter().chain(wayland_dirs).collect();
        }

        self
    }

    pub fn with_icon_search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.icon_search_dirs = dirs;
        self
    }

    pub fn with_session_dirs(mut self, dirs: Vec<SessionDirectory>) -> Self {
        self.session_dirs = dirs;
        self
    }
}

fn with_type(paths: Vec<PathBuf>, session_type: SessionType) -> Vec<SessionDirectory> {
    paths
        .into_iter()
        .map(|path| SessionDirectory::new(path, session_type))
        .collect()
}
