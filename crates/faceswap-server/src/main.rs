//! faceswap-relay: HTTP relay in front of the Segmind face swap API.

use std::sync::Arc;

use faceswap_core::config::API_KEY_VAR;
use faceswap_core::RelayConfig;
use faceswap_server::{build_router, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--help" | "-h" | "help" => {
                println!("faceswap-relay — face swap relay for the Segmind API");
                println!();
                println!("Usage: faceswap-relay");
                println!();
                println!("Environment:");
                println!("  PORT              Listen port (default 8787)");
                println!("  {}   Segmind API key (required for swaps)", API_KEY_VAR);
                println!("  SEGMIND_API_URL   Override the Segmind endpoint");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown argument: {}. Use 'faceswap-relay help' for usage.", arg);
                std::process::exit(1);
            }
        }
    }

    let config = RelayConfig::from_env();
    if config.api_key().is_none() {
        warn!("{} is not set; swap requests will fail until it is configured", API_KEY_VAR);
    }
    info!("Vendor endpoint: {}", config.segmind_url);

    let port = config.port;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Face swap relay listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
