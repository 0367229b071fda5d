//! # rusty-recipes binary
//!
//! The entry point that assembles the application: settings, telemetry,
//! feed load, then the HTTP server.

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use anyhow::Context;
use api_adapters::AppState;
use domains::ports::RecipeStore;
use storage_adapters::{parse_feed, MemoryRecipeStore};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn init_telemetry() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let settings = configs::Settings::load().context("failed to load configuration")?;

    let feed = File::open(&settings.feed.path).with_context(|| {
        format!("can't open recipe feed {}", settings.feed.path.display())
    })?;
    // A bad feed is fatal: serving from an empty or partial store would be
    // worse than not coming up at all.
    let recipes = parse_feed(BufReader::new(feed)).context("recipe feed did not parse")?;

    let store = Arc::new(MemoryRecipeStore::new());
    let loaded = store.bulk_load(recipes).await;
    tracing::info!(count = loaded, "recipe feed loaded");

    let state = Arc::new(AppState { store });
    let app = api_adapters::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.http.host, settings.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "recipes server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
