//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error, warning and debug logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::content::ContentCounts;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    DEBUG_ENABLED.store(config.logging.is_debug(), Ordering::Relaxed);
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(sinks) => sinks.access_line(message),
        None => writer::Console::Stdout.write_line(message),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(sinks) => sinks.error_line(message),
        None => writer::Console::Stderr.write_line(message),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, counts: ContentCounts) {
    write_info("======================================");
    write_info("ILP content server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    if !config.http.api_prefix.is_empty() {
        write_info(&format!(
            "API prefix: {} (routes also served unprefixed)",
            config.http.api_prefix
        ));
    }
    write_info(&format!(
        "Content: {} lessons, {} quizzes, {} concepts",
        counts.lessons, counts.quizzes, counts.concepts
    ));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_content_source(source: &str) {
    write_info(&format!("[Content] Loading from {source}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

/// Only written when `logging.level = "debug"`
pub fn log_debug(message: &str) {
    if DEBUG_ENABLED.load(Ordering::Relaxed) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        write_info(&format!("[Headers] Count: {count}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("\n[Shutdown] {reason}, stopping listener"));
}
