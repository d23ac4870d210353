use dotenv::dotenv;
use signtrack_api::api::http::app;
use signtrack_api::config::ApiConfig;
use signtrack_api::state::{get_store, SigntrackState, SIGNTRACK_STATE};
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n\n================================================");
    println!("✍️  Signtrack API Starting...");

    dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let is_production = env::var("SIGNTRACK_ENV").unwrap_or_default() == "production"
        || env::var("RUST_ENV").unwrap_or_default() == "production";

    if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .init();
        eprintln!("✔︎ Structured JSON logging enabled (production mode)");
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
        println!("✔︎ Human-readable logging enabled (development mode)");
    }

    let config = ApiConfig::load()?;
    tracing::debug!(?config, "Loaded configuration");

    let store = config.open_store().await?;
    println!("✔︎ Record store initialized ({:?})", config.storage);

    let state = Arc::new(SigntrackState::new(store));
    SIGNTRACK_STATE
        .set(state.clone())
        .map_err(|_| "Failed to set SigntrackState")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    println!("✔︎ API listening on {}", listener.local_addr()?);
    println!("🤙 Signtrack API ready!");
    println!("================================================");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n\n================================================");
    println!("🫡 Shutdown signal received, cleaning up...");
    get_store()?.close().await;
    println!("✔︎ Record store closed");
    println!("================================================");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
