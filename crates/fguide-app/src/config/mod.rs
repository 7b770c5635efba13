//! Configuration file parsing for Flutter Guide
//!
//! Settings live in `<config_dir>/flutter-guide/config.toml`; command-line
//! flags are applied over them through [`Overrides`].

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, load_settings, load_settings_from, parse_settings, DEFAULT_CONFIG,
};
pub use types::*;
