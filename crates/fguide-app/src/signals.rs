//! OS signals turned into `Message::Quit`

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use fguide_core::prelude::*;

/// Signals that end the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    /// The controlling terminal went away
    Hangup,
}

impl std::fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
            ShutdownSignal::Hangup => write!(f, "SIGHUP"),
        }
    }
}

/// Spawn a task that sends [`Message::Quit`] on the first shutdown signal
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                info!("Received {}, quitting", signal);
                // The receiver is gone once the loop has already exited
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: ShutdownSignal| {
        signal(kind).map_err(|e| Error::terminal(format!("Failed to listen for {name}: {e}")))
    };
    let mut sigint = listen(SignalKind::interrupt(), ShutdownSignal::Interrupt)?;
    let mut sigterm = listen(SignalKind::terminate(), ShutdownSignal::Terminate)?;
    let mut sighup = listen(SignalKind::hangup(), ShutdownSignal::Hangup)?;

    let received = tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
        _ = sighup.recv() => ShutdownSignal::Hangup,
    };
    Ok(received)
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}
