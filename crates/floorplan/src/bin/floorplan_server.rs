//cargo run --package floorplan --bin floorplan_server -- --config server.toml
use std::path::PathBuf;

use clap::Parser;
use floorplan::server::{self, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Floor plan wall detection server", long_about = None)]
struct Args {
    /// Optional .toml or .json config file (FLOORPLAN_* environment variables otherwise)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"))
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::from_env(),
    };

    tracing::info!(
        host = %config.host,
        port = config.port,
        max_body_mb = config.max_body_mb,
        "Starting floor plan server"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {:?}", e);
        }
        tracing::info!("Received Ctrl+C, shutting down gracefully");
    };

    if let Err(e) = server::serve(config, shutdown).await {
        tracing::error!("Server error: {:?}", e);
        return Err(e.into());
    }

    tracing::info!("Server shut down");
    Ok(())
}
