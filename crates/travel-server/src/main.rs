use anyhow::Result;
use clap::Parser;
use infrastructure::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_server::{api, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override listen address
    #[arg(long)]
    host: Option<String>,

    /// Override API port
    #[arg(long)]
    port: Option<u16>,

    /// Start with the store as-is instead of loading the sample catalog
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "info,travel_server=debug,application=debug,tower_http=debug".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("🧳 Travel Package API Starting...");

    // 1. Load Configuration
    let mut config = AppConfig::load(&args.config_dir)?;

    // Override with CLI args if present
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.no_seed {
        config.store.seed_on_startup = false;
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    // 2. Store, seed data and handlers
    let state = setup_app_state(config).await?;
    let app = api::create_router(state);

    // 3. Serve
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("🚀 API Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
