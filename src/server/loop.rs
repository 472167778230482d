// Server loop module
// Accepts connections until shutdown is requested, then drains in-flight ones

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::ShutdownSignal;
use crate::config::AppState;
use crate::logger;

/// How often the drain phase checks the connection counter
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept loop
///
/// Returns after `shutdown` fires and active connections have finished, or
/// the drain grace period (`write_timeout`) has passed.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<ShutdownSignal>,
) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            _ = shutdown.wait() => break,
        }
    }

    // Stop accepting before draining
    drop(listener);

    let grace = Duration::from_secs(state.config.performance.write_timeout);
    let drained = tokio::time::timeout(grace, async {
        while active_connections.load(Ordering::SeqCst) > 0 {
            tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
        }
    })
    .await;

    if drained.is_err() {
        logger::log_warning(&format!(
            "Shutdown grace period elapsed with {} connection(s) still open",
            active_connections.load(Ordering::SeqCst)
        ));
    }
}
