// Command-line interface
// Flags override the config file and environment

use clap::Parser;

use crate::config::{Config, DEFAULT_CONFIG_PATH};

#[derive(Debug, Parser)]
#[command(
    name = "ilp-server",
    version,
    about = "JSON API serving lessons, quizzes and concepts"
)]
pub struct Cli {
    /// Config file path; the extension may be omitted
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Listen port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Debug logging, including request header counts
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref host) = self.host {
            config.server.host.clone_from(host);
        }
        if self.debug {
            config.logging.level = "debug".to_string();
            config.logging.show_headers = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config::load_from("/nonexistent/ilp-config").unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ilp-server"]).unwrap();
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
        assert!(cli.port.is_none());
        assert!(!cli.debug);

        let mut config = base_config();
        cli.apply_overrides(&mut config);
        assert_eq!(config.server.port, 5000);
        assert!(!config.logging.is_debug());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "ilp-server",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--debug",
            "-c",
            "deploy/ilp.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, "deploy/ilp.toml");

        let mut config = base_config();
        cli.apply_overrides(&mut config);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.logging.is_debug());
        assert!(config.logging.show_headers);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["ilp-server", "--port", "70000"]).is_err());
    }
}
