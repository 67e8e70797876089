//! Termination signals become [`Message::Quit`]

use tokio::sync::mpsc;

use garagem_core::prelude::*;

use crate::message::Message;

/// Spawn a task that turns the first Ctrl+C / SIGTERM into a quit message
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

async fn shutdown_signal() -> Result<&'static str> {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .map(|_| "Ctrl+C")
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            result = ctrl_c => result,
            _ = sigterm.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await
    }
}
