//! Catalog API service
//!
//! A REST backend exposing products, categories and users. Every endpoint
//! answers with the same JSON envelope: `{success, data?, count?, message?}`.

use axum::{Router, middleware::from_fn};
use tokio::signal;
use tracing::info;

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use crate::config::AppConfig;
pub use state::AppState;

/// The complete application: routes plus request logging and CORS
pub fn app(state: AppState, config: &AppConfig) -> Router {
    routes::create_router(state)
        .layer(from_fn(middleware::log_requests))
        .layer(middleware::cors_layer(&config.allowed_origins()))
}

/// Resolve once Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
