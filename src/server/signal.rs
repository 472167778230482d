// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)
//
// Content and configuration are fixed for the life of the process, so there
// is no reload signal: restart the process to pick up changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Shutdown request shared by the signal task and the accept loop
#[derive(Debug, Default)]
pub struct ShutdownSignal {
    notify: Notify,
    requested: AtomicBool,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown; the accept loop stops at its next wakeup
    pub fn trigger(&self, reason: &str) {
        if !self.requested.swap(true, Ordering::SeqCst) {
            logger::log_shutdown(reason);
        }
        // notify_one stores a permit if the loop is not waiting yet
        self.notify.notify_one();
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Resolves once shutdown has been requested
    pub async fn wait(&self) {
        if self.is_requested() {
            return;
        }
        self.notify.notified().await;
    }
}

/// Start signal handlers (Unix)
///
/// | Signal  | Action        |
/// |---------|---------------|
/// | SIGTERM | Graceful stop |
/// | SIGINT  | Graceful stop |
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<ShutdownSignal>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    logger::log_error(&format!("Failed to register signal handlers: {e}"));
                    return;
                }
            };

        logger::log_info(&format!(
            "Signal handlers registered (SIGTERM, SIGINT), pid {}",
            std::process::id()
        ));

        tokio::select! {
            _ = sigterm.recv() => shutdown.trigger("SIGTERM received"),
            _ = sigint.recv() => shutdown.trigger("SIGINT received"),
        }
    });
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<ShutdownSignal>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown.trigger("Ctrl+C received"),
            Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
        }
    });
}
