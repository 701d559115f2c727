//! Strike Engine Binary
//!
//! Starts the StrikeWise analysis service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin strike-engine
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `UPSTOX_ACCESS_TOKEN`: Bearer token for the Upstox market-data API
//!
//! ## Optional
//! - `UPSTOX_BASE_URL`: API base URL (default: <https://api.upstox.com/v2>)
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `RISK_FREE_RATE`: Annualized risk-free rate (default: 0.065)
//! - `PROJECTION_OFFSET_MINUTES`: Forward-projection offset (default: 180)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use chrono::TimeDelta;
use strike_engine::application::use_cases::AnalyzeStrikesUseCase;
use strike_engine::config::{
    DEFAULT_PROJECTION_OFFSET_MINUTES, DEFAULT_RISK_FREE_RATE, EngineConfig,
};
use strike_engine::infrastructure::http::{AppState, create_router};
use strike_engine::infrastructure::upstox::{UpstoxChainAdapter, UpstoxConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Parsed configuration from environment variables.
struct ServiceConfig {
    http_port: u16,
    upstox: UpstoxConfig,
    engine: EngineConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting StrikeWise strike engine");

    let config = parse_config()?;

    let adapter = UpstoxChainAdapter::new(&config.upstox).context("Upstox adapter init failed")?;
    let analyze_strikes = Arc::new(AnalyzeStrikesUseCase::new(
        Arc::new(adapter),
        config.engine,
    ));

    let state = AppState {
        analyze_strikes,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize console tracing with env-filter.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Parse service configuration from environment variables.
fn parse_config() -> anyhow::Result<ServiceConfig> {
    let access_token =
        std::env::var("UPSTOX_ACCESS_TOKEN").context("UPSTOX_ACCESS_TOKEN must be set")?;

    let mut upstox = UpstoxConfig::new(access_token);
    if let Ok(base_url) = std::env::var("UPSTOX_BASE_URL") {
        upstox = upstox.with_base_url(base_url);
    }

    let http_port = parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?;
    let risk_free_rate = parse_env("RISK_FREE_RATE", DEFAULT_RISK_FREE_RATE)?;
    let offset_minutes = parse_env(
        "PROJECTION_OFFSET_MINUTES",
        DEFAULT_PROJECTION_OFFSET_MINUTES,
    )?;

    let engine = EngineConfig::default()
        .with_risk_free_rate(risk_free_rate)
        .with_projection_offset(TimeDelta::minutes(offset_minutes));

    tracing::info!(
        http_port,
        risk_free_rate,
        projection_offset_minutes = offset_minutes,
        upstox_base_url = %upstox.base_url,
        "Configuration loaded"
    );

    Ok(ServiceConfig {
        http_port,
        upstox,
        engine,
    })
}

/// Parse an environment variable with a default, failing on malformed values.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} has an invalid value: {value}")),
        Err(_) => Ok(default),
    }
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
