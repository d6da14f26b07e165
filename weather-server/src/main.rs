//! HTTP front end for the city weather service.
//!
//! This crate focuses on:
//! - Process bootstrap (arguments, config, logging)
//! - Routing inbound paths to the lookup service
//! - Mapping domain errors to HTTP status codes and JSON error payloads

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather_core::{Config, OpenWeatherProvider};

mod error;
mod routes;
mod view;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "HTTP API for current weather by city")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Socket address to listen on; overrides the configured value.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let provider = Arc::new(OpenWeatherProvider::new(&config.provider));
    let app = routes::router(provider);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
