// Connection handling module
// Accepts a single TCP connection and serves it on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::api;
use crate::config::{AppState, PerformanceConfig};
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment first, then check, so two racing accepts can't both pass
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    if state.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(
        stream,
        peer_addr,
        Arc::clone(state),
        Arc::clone(conn_counter),
    );
}

/// Serve one connection on a spawned task.
///
/// HTTP/1.1 with keep-alive when `keep_alive_timeout > 0`. The whole
/// connection is bounded by [`connection_lifetime`]; the counter is
/// decremented however the connection ends.
fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let timeout_duration = connection_lifetime(performance);

        let mut builder = http1::Builder::new();
        builder
            .keep_alive(performance.keep_alive_timeout > 0)
            .timer(TokioTimer::new())
            .header_read_timeout(Duration::from_secs(performance.read_timeout));

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| api::handle_request(req, Arc::clone(&service_state), peer_addr)),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => logger::log_debug(&format!(
                "Connection from {peer_addr} closed after {} seconds",
                timeout_duration.as_secs()
            )),
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Upper bound on one connection's life
///
/// `max(read_timeout, write_timeout)` for a single exchange; a keep-alive
/// connection may stay open for `keep_alive_timeout` if that is longer.
fn connection_lifetime(performance: &PerformanceConfig) -> Duration {
    let exchange = performance.read_timeout.max(performance.write_timeout);
    Duration::from_secs(exchange.max(performance.keep_alive_timeout))
}
