//! Greeter MCP Server
//!
//! This binary implements the Model Context Protocol (MCP) server side for
//! greeter, exposing the registered tools to a single client over newline-
//! delimited JSON-RPC 2.0 on stdin/stdout.

use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

mod config;
mod mcp;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs must never reach stdout: every byte there belongs to the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = config::Config::load()?;
    let registry = tools::default_registry();

    tracing::info!(
        name = %config.server.name,
        version = %config.server.version,
        tools = registry.len(),
        "serving MCP on stdio"
    );

    let server = mcp::McpServer::new(&config, registry);

    let stdin = io::stdin();
    let stdout = io::stdout();
    server.serve(stdin.lock(), stdout).await?;

    tracing::info!("input stream closed, shutting down");
    Ok(())
}
