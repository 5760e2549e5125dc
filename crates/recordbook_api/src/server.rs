//! # HTTP Server
//!
//! Combines the user and health routers and serves them until Ctrl-C.

use std::net::SocketAddr;

use axum::Router;
use log::{info, warn};
use recordbook_core::DbPool;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::{fallback_handler, health_routes, user_routes};
use crate::state::AppState;

/// REST server over one connection pool.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ServerConfig, pool: DbPool) -> Self {
        let router = build_router(pool);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until a shutdown signal arrives.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address `{}`: {err}", self.config.socket_addr()),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!("event=http_start module=api status=ok addr={addr}");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("event=http_stop module=api status=ok addr={addr}");
        Ok(())
    }
}

/// Builds the full application router over `pool`.
pub fn build_router(pool: DbPool) -> Router {
    let state = AppState::shared(pool);
    Router::new()
        .merge(health_routes(state.clone()))
        .merge(user_routes(state))
        .fallback(fallback_handler)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=http_signal module=api status=error error={err}");
        std::future::pending::<()>().await;
    }
    info!("event=http_shutdown module=api status=start");
}
