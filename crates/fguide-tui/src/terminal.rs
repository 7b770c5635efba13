//! Terminal setup and restoration

use fguide_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen
///
/// A panic afterwards is written to the log and restores the terminal
/// before the default report is printed.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    debug!("Terminal initialised");
    Ok(terminal)
}

/// Leave the alternate screen and raw mode
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
