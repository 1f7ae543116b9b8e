//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{read_config, ConfigError};
use crate::config::{validate_config, RestrictConfig};

#[derive(Debug, Parser)]
#[command(name = "client-restrict")]
#[command(about = "Serve a service that only answers one client IP address", long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "CLIENT_RESTRICT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:3000.
    #[arg(short, long, env = "CLIENT_RESTRICT_BIND")]
    pub bind: Option<String>,

    /// The only remote IP allowed through.
    #[arg(short, long, env = "CLIENT_RESTRICT_ALLOWED_IP")]
    pub allowed_ip: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, env = "CLIENT_RESTRICT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file (or defaults), apply flag overrides, then validate.
    pub fn resolve_config(&self) -> Result<RestrictConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => RestrictConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(allowed_ip) = &self.allowed_ip {
            config.access.allowed_ip = allowed_ip.clone();
        }
        if let Some(log_level) = &self.log_level {
            config.observability.log_level = log_level.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
