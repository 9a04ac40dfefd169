//! Server configuration.
//!
//! Built-in defaults, then an optional TOML file, then command-line flags
//! and `PETCLINIC_*` environment variables, later sources winning.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid listen address: {0}")]
    Address(String),
}

/// Command-line flags for `petclinic-server`.
#[derive(Debug, Default, Parser)]
#[command(name = "petclinic-server", version, about = "Pet clinic visit records server")]
pub struct Cli {
    /// TOML config file
    #[arg(long, env = "PETCLINIC_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "PETCLINIC_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PETCLINIC_PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "PETCLINIC_DATABASE")]
    pub database: Option<PathBuf>,

    /// Use a transient database, seeded with sample data
    #[arg(long)]
    pub in_memory: bool,

    /// Load sample data into an empty database
    #[arg(long)]
    pub seed: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "PETCLINIC_LOG")]
    pub log_level: Option<String>,
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub in_memory: bool,
    pub seed: bool,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("petclinic.db"),
            in_memory: false,
            seed: false,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Combine the config file named by `cli` (if any) with the flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(host) = &cli.host {
            config.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(database) = &cli.database {
            config.database_path = database.clone();
        }
        if let Some(log_level) = &cli.log_level {
            config.log_level = log_level.clone();
        }
        config.in_memory |= cli.in_memory;
        config.seed |= cli.seed;

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Address(format!("{}:{}", self.host, self.port)))
    }

    /// Whether to load sample data at startup.
    pub fn should_seed(&self) -> bool {
        self.seed || self.in_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert!(!config.should_seed());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("port = 9000\nseed = true\n").unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.seed);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database_path, PathBuf::from("petclinic.db"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = ServerConfig::from_toml_str("port = \"eighty\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"0.0.0.0\"\nport = 9000\nlog_level = \"debug\"").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            port: Some(7000),
            in_memory: true,
            ..Default::default()
        };

        let config = ServerConfig::resolve(&cli).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7000);
        assert_eq!(config.log_level, "debug");
        assert!(config.should_seed());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/petclinic.toml")),
            ..Default::default()
        };
        assert!(matches!(
            ServerConfig::resolve(&cli),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_bad_host() {
        let config = ServerConfig {
            host: "not a host".into(),
            ..Default::default()
        };
        assert!(matches!(config.bind_addr(), Err(ConfigError::Address(_))));
    }
}
