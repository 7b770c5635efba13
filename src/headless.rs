//! Headless mode - print the guide as JSON and exit
//!
//! Everything the page would show for one platform is written to stdout as
//! a single pretty-printed JSON document, for scripts and tests that cannot
//! drive a terminal UI.

use std::io::{self, Write};

use fguide_core::prelude::*;
use fguide_core::{Guide, Platform};

/// Write the guide for `platform` to stdout
pub fn run_headless(platform: Platform) -> Result<()> {
    info!("Printing the {} guide as JSON", platform);

    let mut stdout = io::stdout().lock();
    write_guide(&mut stdout, platform)?;
    stdout.flush()?;
    Ok(())
}

/// Serialise the guide for `platform` into `out`, followed by a newline
pub fn write_guide(out: &mut impl Write, platform: Platform) -> Result<()> {
    let json = Guide::for_platform(platform)
        .to_json_pretty()
        .context("Failed to serialize guide")?;
    writeln!(out, "{}", json)?;
    Ok(())
}
