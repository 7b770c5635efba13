//! Flutter Guide - a terminal guide to setting up Flutter with VS Code
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fguide_app::config::{self, Overrides, ThemeMode};
use fguide_core::prelude::*;
use fguide_core::{logging, Platform};

/// Flutter Guide - set up Flutter with VS Code from your terminal
#[derive(Parser, Debug)]
#[command(name = "fguide")]
#[command(about = "A terminal guide to setting up Flutter with VS Code", long_about = None)]
struct Args {
    /// Platform to show instructions for (windows, macos, linux)
    #[arg(short, long, value_name = "PLATFORM")]
    platform: Option<Platform>,

    /// Initial colour theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Disable decorative animation
    #[arg(long)]
    no_animations: bool,

    /// Print the guide as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Use a specific config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            platform: self.platform,
            theme: self.theme.map(ThemeMode::from),
            no_animations: self.no_animations,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let mut settings = config::load_settings_from(args.config.as_deref())
        .with_context(|| format!("Failed to load settings from {:?}", args.config))?;
    settings.apply(&args.overrides());
    debug!("Effective settings: {:?}", settings);

    let result = if args.headless {
        flutter_guide::run_headless(settings.behavior.platform())
    } else {
        flutter_guide::run(settings).await
    };

    if let Err(ref e) = result {
        e.log("Application error");
    }
    info!("Flutter Guide exiting");

    result
}
