/*
 * Responsibility
 * - Load config -> build Router -> bind -> axum::serve()
 * - Process-wide tracing subscriber and panic hook
 */
use std::{net::SocketAddr, panic, process};

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware};

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=debug,tower_http=trace
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Route panics through tracing; stderr is often not collected under an orchestrator.
        tracing::error!(?info, "panic");

        // Development fails fast so a panicking handler is noticed at once.
        // Production keeps the default hook and the server keeps serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().context("failed to load configuration")?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting health API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let listener = bind(config.addr).await?;
    serve(listener, &config).await
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

pub async fn serve(listener: TcpListener, config: &Config) -> Result<()> {
    let app = build_router(config);
    axum::serve(listener, app)
        .await
        .context("server terminated")?;
    Ok(())
}

pub fn build_router(config: &Config) -> Router {
    middleware::http::apply(api::routes(), config.request_timeout)
}
