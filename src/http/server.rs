//! HTTPS server setup.
//!
//! # Responsibilities
//! - Build the Axum router with all middleware layers
//! - Bind the TLS listener and serve until shutdown
//!
//! # Middleware order (outermost first)
//! ```text
//! access log → security headers → timeout → blocklist → static files
//! ```
//! The security header layer sits outside the blocklist so 403 responses
//! carry the full header set too.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

use crate::config::ServeConfig;
use crate::http::static_files;
use crate::lifecycle::shutdown;
use crate::observability::logging;
use crate::security::{blocklist, headers};

/// Application state injected into the static file handler.
#[derive(Clone)]
pub struct AppState {
    /// Root of the served directory tree.
    pub root: Arc<PathBuf>,
}

/// HTTPS server for the static tree.
pub struct HttpServer {
    router: Router,
    config: ServeConfig,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServeConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServeConfig {
        &self.config
    }

    /// Run the server, accepting TLS connections until interrupted.
    pub async fn run(self, tls: RustlsConfig) -> Result<(), std::io::Error> {
        let addr = self.config.bind_addr();

        let handle = Handle::new();
        tokio::spawn(shutdown::watch(handle.clone()));

        tracing::info!(address = %addr, "HTTPS server starting");

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &ServeConfig) -> Router {
    let state = AppState {
        root: Arc::new(config.root.clone()),
    };

    Router::new()
        .fallback(static_files::serve)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging::access_log))
                .layer(middleware::from_fn(headers::apply_security_headers))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                )))
                .layer(middleware::from_fn(blocklist::enforce_blocklist)),
        )
}
