use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::ServerConfig;
use activities::database::ActivityRegistry;
use activities::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();

    let registry = match config
        .seed_activities()
        .and_then(ActivityRegistry::from_seed)
    {
        Ok(r) => r,
        Err(e) => {
            error!(seed_file = ?config.seed_file, "could not build activity registry: {}", e);
            std::process::exit(1);
        }
    };
    info!(activities = registry.len(), "activity registry seeded");

    let app = web::router(Arc::new(registry));

    // Bind, with one fallback port.
    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(a) => a,
        Err(e) => {
            error!(host = %config.host, port = config.port, "invalid listen address: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = SocketAddr::new(addr.ip(), config.port.wrapping_add(1));
            warn!("could not bind {}: {}, trying {}", addr, e, fallback);
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("could not bind fallback {}: {}", fallback, e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("listening on http://{}", bound),
        Err(e) => warn!("listening, but local address unavailable: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}
