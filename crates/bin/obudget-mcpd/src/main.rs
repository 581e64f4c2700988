//! Daemon entry point for the obudget MCP server.
//!
//! Loads configuration from the command line and environment, builds the
//! upstream client once, and serves the MCP protocol over stdio and/or
//! streamable HTTP.

mod config;

use obudget_core::ObudgetClient;
use obudget_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ObudgetConfig};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ObudgetConfig::from_args()?;
    init_tracing(&config.log_filter)?;

    let client = ObudgetClient::new(&config.client_config())?;
    info!(
        base_url = %client.base_url(),
        timeout_secs = config.http_timeout.as_secs(),
        "obudget-mcpd starting"
    );

    let http = config.mcp_serve.then(|| {
        McpHttpServerConfig::new(config.mcp_http_addr).with_stateful_mode(config.mcp_stateful)
    });

    match (config.enable_stdio, http) {
        (true, Some(http)) => {
            tokio::try_join!(serve_stdio(client.clone()), serve_streamable_http(client, http))?;
        }
        (true, None) => serve_stdio(client).await?,
        (false, Some(http)) => serve_streamable_http(client, http).await?,
        (false, None) => return Err(ConfigError::NoTransport.into()),
    }
    Ok(())
}

/// Logs go to stderr: stdout carries the stdio MCP transport.
fn init_tracing(filter: &str) -> Result<(), BoxError> {
    let filter = EnvFilter::try_new(filter).map_err(|err| ConfigError::InvalidSetting {
        name: "OBUDGET_LOG",
        value: format!("{filter}: {err}"),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
}
