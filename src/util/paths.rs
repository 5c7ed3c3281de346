//! Path utilities for the greeter-sessions config directory

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom config directory path
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the config directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default XDG config location.
pub fn init_config_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_config_dir);
    if CONFIG_DIR.set(path.clone()).is_err() {
        let existing = CONFIG_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Config directory already initialized"
        );
    }
}

/// Get the default config directory path (~/.config/greeter-sessions)
fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|c| c.join("greeter-sessions"))
        .unwrap_or_else(|| PathBuf::from(".greeter-sessions"))
}

/// Get the config directory.
/// Returns the custom path if set via init_config_dir(), otherwise the default
pub fn config_dir() -> PathBuf {
    CONFIG_DIR.get().cloned().unwrap_or_else(default_config_dir)
}

/// Get the config file path (<config dir>/config.toml)
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
