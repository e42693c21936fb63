use clap::Parser;
use std::path::PathBuf;

/// Cirrhosis Risk Dashboard - serves the patient assessment UI
#[derive(Parser, Debug, Clone)]
#[command(name = "cirrhosis-dashboard", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "CIRRHOSIS_CONFIG", default_value = "cirrhosis.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "CIRRHOSIS_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "CIRRHOSIS_PORT")]
    pub port: Option<u16>,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, env = "CIRRHOSIS_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Check if any server setting is overridden on the command line
    pub fn has_server_overrides(&self) -> bool {
        self.host.is_some() || self.port.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["cirrhosis-dashboard"]);
        assert_eq!(cli.config, PathBuf::from("cirrhosis.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.log_level, "info");
        assert!(!cli.has_server_overrides());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "cirrhosis-dashboard",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.has_server_overrides());
    }
}
