use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod config;
mod mcp;
mod tools;

use mcp::registry::McpTool;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "MCP greeting server - demo tools over stdio JSON-RPC")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdin/stdout (same loop as the greeter-mcp binary)
    Serve,

    /// Print the registered tool descriptors as JSON
    Tools,

    /// Run the greeting tool directly, without the MCP transport
    Greet {
        /// Name to greet
        name: String,

        /// Birthday to mention in the greeting
        #[arg(long)]
        birthday: Option<String>,
    },

    /// Encode a file the way the EncodeFile tool does
    Encode {
        /// Path of the file to encode
        path: std::path::PathBuf,
    },

    /// Write the default config to ~/.greeter/config.toml
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    match cli.command {
        Commands::Serve => {
            let server = mcp::McpServer::new(&config, tools::default_registry());
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            server.serve(stdin.lock(), stdout).await?;
        }

        Commands::Tools => {
            let registry = tools::default_registry();
            let descriptors: Vec<_> = registry.list().iter().map(|t| t.describe()).collect();
            println!("{}", serde_json::to_string_pretty(&descriptors)?);
        }

        Commands::Greet { name, birthday } => {
            let arguments = json!({ "value": name, "birthday": birthday });
            let content = tools::hello::HelloTool.call(&arguments.to_string());
            println!("{}", content[0]["text"].as_str().unwrap_or_default());
        }

        Commands::Encode { path } => {
            let arguments = json!({ "path": path });
            let content = tools::encode::EncodeFileTool.call(&arguments.to_string());
            println!("{}", serde_json::to_string_pretty(&content)?);
        }

        Commands::Init => {
            let path = config::Config::config_path()?;
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                config.save()?;
                println!("✓ Created {}", path.display());
            }
        }
    }

    Ok(())
}
