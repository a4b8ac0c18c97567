//! nullkv Server Binary
//!
//! Serves the in-memory store over HTTP.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use nullkv::config::ConfigBuilder;
use nullkv::network::Server;
use nullkv::{Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// nullkv Server
#[derive(Parser, Debug)]
#[command(name = "nullkv-server")]
#[command(about = "In-memory key-value store over HTTP")]
#[command(version)]
struct Args {
    /// Host to bind (overrides NULL_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides NULL_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nullkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = resolve_config(args)?;

    tracing::info!("nullkv Server v{}", nullkv::VERSION);
    tracing::info!("Listen address: {}", config.addr());

    let server = Server::bind(&config, Arc::new(Store::new()))
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn resolve_config(args: Args) -> anyhow::Result<Config> {
    let mut builder = ConfigBuilder::from_config(Config::from_env()?);
    if let Some(host) = args.host {
        builder = builder.host(host);
    }
    if let Some(port) = args.port {
        builder = builder.port(port);
    }
    Ok(builder.build())
}
