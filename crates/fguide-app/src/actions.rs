//! Side effects requested by [`UpdateAction`]

use std::process::Command;

use crate::handler::UpdateAction;
use fguide_core::prelude::*;

/// Execute an action. Browser launches run on a spawned task.
pub fn handle_action(action: UpdateAction) {
    match action {
        UpdateAction::OpenUrl { url, browser } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url, &browser) {
                    e.log("Link not opened");
                }
            });
        }
    }
}

/// Open a URL in the system browser (fire-and-forget).
///
/// Uses `browser` when non-empty, otherwise the platform opener.
pub fn open_url_in_browser(url: &str, browser: &str) -> Result<()> {
    spawn_opener(url, browser).map_err(|e| Error::browser(url, e.to_string()))
}

fn spawn_opener(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        // Custom browser specified in settings.
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    // Platform-default browser.
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_browser_command_is_a_browser_error() {
        let err = open_url_in_browser("https://flutter.dev", "fguide-no-such-browser-binary")
            .unwrap_err();
        match err {
            Error::Browser { url, .. } => assert_eq!(url, "https://flutter.dev"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(Error::browser("u", "r").is_recoverable());
    }
}
