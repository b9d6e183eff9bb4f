pub mod toml_config;

use crate::core::aggregator::DEFAULT_CONCURRENT_REQUESTS;
use crate::utils::error::Result;
use crate::utils::validation::{parse_base_url, require, validate_at_least, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5005;

#[derive(Debug, Clone, Parser)]
#[command(name = "file-gateway")]
#[command(about = "HTTP gateway that serves remote CSV files as validated JSON records")]
pub struct CliArgs {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "API_URL", help = "Base URL of the remote file service")]
    pub api_url: Option<String>,

    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value_t = DEFAULT_CONCURRENT_REQUESTS)]
    pub concurrent_requests: usize,

    #[arg(long, help = "Read server and upstream settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Serve the built-in fixture files instead of calling the upstream")]
    pub use_fixtures: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Builds the runtime configuration. A `--config` file replaces the
    /// server and upstream flags; `--use-fixtures` applies either way.
    pub fn into_config(self) -> Result<GatewayConfig> {
        let mut config = match &self.config {
            Some(path) => GatewayConfig::from_file(path)?,
            None => {
                let base_url = if self.use_fixtures {
                    self.api_url.clone().unwrap_or_default()
                } else {
                    require("api_url", &self.api_url)?.clone()
                };

                GatewayConfig {
                    server: ServerConfig {
                        host: self.host.clone(),
                        port: self.port,
                    },
                    upstream: UpstreamConfig {
                        base_url,
                        api_key: self.api_key.clone(),
                        concurrent_requests: self.concurrent_requests,
                    },
                    use_fixtures: false,
                }
            }
        };

        config.use_fixtures |= self.use_fixtures;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Everything the upstream client needs; passed to its constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub use_fixtures: bool,
}

impl GatewayConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_at_least("server.port", self.server.port as usize, 1)?;
        validate_at_least(
            "upstream.concurrent_requests",
            self.upstream.concurrent_requests,
            1,
        )?;

        if !self.use_fixtures {
            parse_base_url("upstream.base_url", &self.upstream.base_url)?;
            if self.upstream.api_key.is_empty() {
                tracing::warn!("upstream.api_key is empty; requests will carry an empty Authorization header");
            }
        }

        Ok(())
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_concurrent_requests() -> usize {
    DEFAULT_CONCURRENT_REQUESTS
}
