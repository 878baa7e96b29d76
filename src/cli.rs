//! Command-line interface.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::server::ServeOptions;

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Terminal counter backed by a remote counting service")]
pub struct Cli {
    /// Path to config file (default: ~/.config/tally/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the counting service endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the amount sent by the Fetch Count control
    #[arg(long, value_name = "N")]
    pub amount: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a local counting service
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8787")]
        bind: SocketAddr,

        /// Answer every request with this delta instead of echoing the amount
        #[arg(long, allow_hyphen_values = true)]
        delta: Option<i64>,
    },
}

impl Command {
    pub fn serve_options(&self) -> ServeOptions {
        match self {
            Command::Serve { delta, .. } => ServeOptions { delta: *delta },
        }
    }
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.fetch.endpoint = endpoint.clone();
        }
        if let Some(amount) = self.amount {
            config.fetch.amount = amount;
        }
    }
}
