//! Settings loader for `<config_dir>/flutter-guide/config.toml`

use super::types::Settings;
use fguide_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "flutter-guide";

/// Commented configuration listing every key with its default
pub const DEFAULT_CONFIG: &str = r#"# Flutter Guide Configuration

[behavior]
default_platform = "windows"   # windows | macos | linux
auto_select = true             # select the default platform on start

[ui]
theme = "dark"                 # dark | light
animations = true
icons = "unicode"              # unicode | nerd_fonts

[links]
browser = ""                   # empty = system default opener
"#;

/// Standard location of the config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file yields defaults; an unreadable or invalid one is logged
/// and also yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Strict parse, for callers that want the error
pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Load from an explicit path (which must exist) or the default location
pub fn load_settings_from(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(Error::config_not_found(path)),
        Some(path) => Ok(load_settings(path)),
        None => Ok(default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default()),
    }
}
