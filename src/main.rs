use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::info;

mod cli;

use cli::Cli;
use ytserve::config::{self, Config};
use ytserve::innertube::Innertube;
use ytserve::server::{self, AppState};
use ytserve::service::TranscriptService;

fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Config file is optional; missing or invalid falls back to defaults
    let config = Config::load().unwrap_or_default();

    let env_port = std::env::var("PORT").ok().and_then(|s| s.parse().ok());
    let port = config::pick_port(cli.port, env_port, config.port);

    let client = reqwest::Client::new();

    // One provider handle for the process lifetime, shared across requests
    let provider = Innertube::new(client)
        .await
        .wrap_err("initializing InnerTube handle")?;

    let state = AppState {
        service: TranscriptService::new(Arc::new(provider)),
        default_lang: cli.lang.or(config.default_lang),
    };

    let addr: SocketAddr = format!("{}:{port}", cli.host)
        .parse()
        .wrap_err("invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}
