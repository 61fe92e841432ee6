//! Weather Widget MCP Server
//!
//! A Model Context Protocol (MCP) server exposing widget-producing tools,
//! including a live weather widget backed by the OpenWeather API.

use clap::{Parser, Subcommand};

use weather_widget_mcp_server::error::Result;
use weather_widget_mcp_server::mcp::http;
use weather_widget_mcp_server::mcp::server::McpServer;

/// Weather Widget MCP Server
#[derive(Parser)]
#[command(name = "weather-widget-mcp-server")]
#[command(author, version, about = "MCP server for widget tools with a live weather dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over HTTP instead of stdio
    Http {
        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Http { port }) => {
            http::serve(port).await?;
        }
        None => {
            let mut server = McpServer::new();
            server.run_stdio().await?;
        }
    }

    Ok(())
}
