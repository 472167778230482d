// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `debug` enables per-request debug lines (headers, user id)
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

impl LoggingConfig {
    pub fn is_debug(&self) -> bool {
        self.level.eq_ignore_ascii_case("debug")
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
    /// Optional path prefix the API is also mounted under (e.g. `/api`)
    pub api_prefix: String,
}

/// Content source configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContentConfig {
    /// Directory with lessons.toml / quizzes.toml / concepts.toml;
    /// the embedded content is used when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}
