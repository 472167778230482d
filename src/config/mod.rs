// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, PerformanceConfig};

/// Default config file, looked up without extension so `config.toml` matches
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the config file
    /// (optional), then `ILP_*` environment variables (`ILP_SERVER__PORT=8080`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "ilp-server/0.1")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("http.api_prefix", "/api")?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("ILP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
