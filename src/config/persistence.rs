use std::fs;
use std::path::PathBuf;

use super::AppConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/cardstack/config.ron`.
fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("cardstack").join("config.ron"))
}

/// Loads the config from disk, falling back to defaults on any error.
pub(crate) fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    let Ok(contents) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    ron::from_str(&contents).unwrap_or_default()
}
